use chrono::Local;
use log::LevelFilter;

pub fn init_logger(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}][{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(level)
        // cap dependency chatter at warn
        .level_for("hyper", LevelFilter::Warn.min(level))
        .level_for("reqwest", LevelFilter::Warn.min(level))
        .chain(std::io::stdout())
        .apply()?;

    Ok(())
}
