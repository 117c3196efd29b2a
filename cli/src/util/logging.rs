use log::LevelFilter;
use std::io::Write;

pub(crate) fn setup_logger(level: LevelFilter) {
    env_logger::builder()
        .filter(None, level)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{style}{}{style:#} {}:{}] - {} ",
                record.level(),
                record.file().unwrap_or_default(),
                record.line().unwrap_or_default(),
                record.args()
            )
        })
        .init();

    log::debug!("Set up logging at level {}.", level);
}

pub(crate) fn level_from_flags(quiet: bool, trace: bool, debug: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Off
    } else if trace {
        LevelFilter::Trace
    } else if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_takes_precedence() {
        assert_eq!(LevelFilter::Off, level_from_flags(true, true, true));
        assert_eq!(LevelFilter::Trace, level_from_flags(false, true, true));
        assert_eq!(LevelFilter::Debug, level_from_flags(false, false, true));
        assert_eq!(LevelFilter::Info, level_from_flags(false, false, false));
    }
}
