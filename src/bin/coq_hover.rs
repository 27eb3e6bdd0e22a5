use clap::Parser;
use std::fs;
use std::io::{self, Read};

use coqhover::{
    config::{Cursor, MainConfig},
    engine::CommandEngine,
    logger,
    query::Query,
    textbuf::TextBuffer,
    Result,
};

fn main() -> Result<()> {
    let config = MainConfig::parse();
    logger::init(config.config().log_level)?;

    let output: Option<String> = match config {
        MainConfig::Term {
            cursor,
            selection,
            kind,
            config,
        } => {
            let locator = config.locator()?;
            let text = read_buffer(&cursor)?;
            let buffer = TextBuffer::new(&text);

            locator
                .resolve(&buffer, cursor.position, selection.as_ref())
                .map(|term| Query::new(kind, term).command())
        }
        MainConfig::Render { config } => {
            let provider = config.hover_provider()?;
            let raw = read_stdin()?;

            provider.render(&raw).map(|hover| hover.value)
        }
        MainConfig::Hover {
            cursor,
            engine,
            engine_args,
            config,
        } => {
            let provider = config.hover_provider()?;
            let engine = CommandEngine::new(engine, engine_args);
            let text = read_buffer(&cursor)?;
            let buffer = TextBuffer::new(&text);

            provider
                .provide(&buffer, cursor.position, &engine)
                .map(|hover| hover.value)
        }
    };

    // Early exit, signaling there is nothing to show.
    match output {
        None => std::process::exit(1),
        Some(text) => println!("{}", text),
    }

    Ok(())
}

fn read_buffer(cursor: &Cursor) -> Result<String> {
    match &cursor.file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().lock().read_to_string(&mut buffer)?;
    Ok(buffer)
}
