//! Logging to stderr, through `fern`.

use log::LevelFilter;

use crate::Result;

pub fn dispatch(level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}: {}",
                record.level().to_string().to_lowercase(),
                message
            ))
        })
        .chain(std::io::stderr())
}

/// Install the logger. Can only be called once.
pub fn init(level: LevelFilter) -> Result<()> {
    dispatch(level).apply()?;
    Ok(())
}
