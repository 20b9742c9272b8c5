use crate::entity::{self, Entity};
use crate::error::Result;
use crate::input;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Iterates the entities found on each line of `reader`. A line holding a
/// FeatureCollection yields one entity per feature.
pub struct Reader<'a> {
    reader: &'a mut dyn BufRead,
    pending: VecDeque<Entity>,
}

impl<'a> Reader<'a> {
    pub fn new(reader: &'a mut dyn BufRead) -> Reader<'a> {
        Reader {
            reader,
            pending: VecDeque::new(),
        }
    }
}

fn read_line(buf_read: &mut dyn BufRead) -> Option<io::Result<String>> {
    let mut buf = String::new();
    match buf_read.read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(Ok(buf)),
        Err(e) => Some(Err(e)),
    }
}

impl<'a> Iterator for Reader<'a> {
    type Item = Result<Entity>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.pending.pop_front() {
                return Some(Ok(e));
            }
            let line = match read_line(&mut *self.reader)? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            if line.trim().is_empty() {
                continue;
            }
            match entity::from_input(input::read_line(line)) {
                Ok(entities) => self.pending.extend(entities),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Runs `handler` on every entity read from `input`, writing each line it
/// returns to `output`. Stops at the first error.
pub fn for_entity<F>(input: &mut dyn BufRead, output: &mut dyn Write, mut handler: F) -> Result<()>
where
    F: FnMut(Entity) -> Result<Vec<String>>,
{
    for (idx, e_res) in Reader::new(input).enumerate() {
        let e = e_res?;
        debug!(idx, entity = %e, "Read entity");
        for line in handler(e)? {
            writeln!(output, "{}", line)?;
        }
    }
    Ok(())
}

pub fn for_stdin_entity<F>(handler: F) -> Result<()>
where
    F: FnMut(Entity) -> Result<Vec<String>>,
{
    let stdin = io::stdin();
    let mut stdin_reader = stdin.lock();
    let stdout = io::stdout();
    let mut stdout_writer = stdout.lock();
    for_entity(&mut stdin_reader, &mut stdout_writer, handler)
}
