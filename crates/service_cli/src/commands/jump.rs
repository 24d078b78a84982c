//! Jump command implementation
//!
//! Advances the configured generator by whole jumps of 2^64 draws and
//! prints each resulting state, ready to be passed back through `--state`.

use std::io::Write;

use bitgen_core::StreamSet;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the jump command
pub fn run(config: &CliConfig, times: usize, out: &mut impl Write) -> Result<()> {
    let base = config.generator()?;
    info!("Deriving {} jumped states from {}", times, base.state());

    for (index, stream) in StreamSet::new(&base, times + 1).iter().enumerate() {
        writeln!(out, "{:>4} {}", index, stream.state())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_states_from_one_two() {
        let config = CliConfig {
            state: Some("1:2".to_string()),
            ..CliConfig::default()
        };
        let mut buf = Vec::new();
        run(&config, 1, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "   0 0x0000000000000001:0x0000000000000002",
                "   1 0x814146b67b285f30:0x7f6ff236623b4e25",
            ]
        );
    }

    #[test]
    fn test_zero_jumps_prints_base() {
        let config = CliConfig::default();
        let mut buf = Vec::new();
        run(&config, 0, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }
}
