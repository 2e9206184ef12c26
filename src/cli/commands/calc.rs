use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::time::{duration_label, parse_required_time};

/// Handle the `calc` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        check_in,
        check_out,
    } = cmd
    {
        let start = parse_required_time(check_in)?;
        let end = parse_required_time(check_out)?;

        let net = end.saturating_sub(start).saturating_sub(cfg.break_minutes);
        println!("{}", duration_label(net));
    }

    Ok(())
}
