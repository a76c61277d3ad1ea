use queuenet::{Event, Parameters};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use output::Output;
use Result;

pub struct Text {
    writer: BufWriter<File>,
}

impl Text {
    pub fn new<T: AsRef<Path>>(path: T, parameters: &Parameters) -> Result<Text> {
        let path = path.as_ref();
        info!(target: "Text", "Writing the event log into {:?}...", path);
        let mut writer = BufWriter::new(File::create(path)?);
        writeln!(writer, "{}", parameters)?;
        Ok(Text { writer: writer })
    }
}

impl Output for Text {
    #[inline]
    fn next(&mut self, event: &Event) -> Result<()> {
        write!(self.writer, "{}\n\n", event)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
