use queuenet::Event;
use sqlite::{self, Connection, State, Statement};
use std::mem;
use std::path::Path;

use output::Output;
use Result;

pub struct Database {
    statement: Statement<'static>,
    #[allow(dead_code)]
    connection: Box<Connection>,
}

impl Database {
    pub fn new<T: AsRef<Path>>(path: T) -> Result<Database> {
        use sql::prelude::*;

        let path = path.as_ref();
        info!(target: "Database", "Writing the event log into {:?}...", path);
        let connection = Box::new(sqlite::open(path)?);

        connection.execute({
            ok!(create_table("events").if_not_exists().columns(&[
                "job".integer().not_null(), "status".string().not_null(),
                "station".string().not_null(), "time".integer().not_null(),
            ]).compile(), Output)
        })?;

        connection.execute(ok!(delete_from("events").compile(), Output))?;
        connection.execute("BEGIN TRANSACTION;")?;

        let statement = {
            let statement = connection.prepare({
                ok!(insert_into("events").columns(&[
                    "job", "status", "station", "time",
                ]).batch(1).compile(), Output)
            })?;
            unsafe { mem::transmute::<sqlite::Statement, sqlite::Statement<'static>>(statement) }
        };

        Ok(Database { statement: statement, connection: connection })
    }
}

impl Output for Database {
    fn next(&mut self, event: &Event) -> Result<()> {
        let id = event.job().map(|job| job.id).unwrap_or(0);
        let statement = &mut self.statement;
        statement.reset()?;
        statement.bind((1, id as i64))?;
        statement.bind((2, event.status()))?;
        statement.bind((3, event.station()))?;
        statement.bind((4, event.time as i64))?;
        if State::Done != statement.next()? {
            raise!("failed to write into the database");
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.statement.reset()?;
        self.connection.execute("COMMIT;")?;
        Ok(())
    }
}
