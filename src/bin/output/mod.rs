use queuenet::{Event, Parameters};
use std::path::Path;

use Result;

mod database;
mod text;

use self::database::Database;
use self::text::Text;

pub trait Output {
    fn next(&mut self, &Event) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

pub fn new<T: AsRef<Path>>(parameters: &Parameters, log: T, database: Option<T>)
                           -> Result<Vec<Box<dyn Output>>> {
    let mut outputs: Vec<Box<dyn Output>> = vec![Box::new(Text::new(log, parameters)?)];
    if let Some(database) = database {
        outputs.push(Box::new(Database::new(database)?));
    }
    Ok(outputs)
}
