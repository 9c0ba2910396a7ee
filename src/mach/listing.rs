use super::{Address, MAX_LINE_LEN};
use crate::error;
use crate::lang::{Error, Line, LineNumber};
use std::io::{BufRead, Write};
use std::sync::Arc;

/// ## The program store
///
/// Lines are kept sorted by number so an instruction pointer is simply
/// an index. Clones are cheap and share storage until one side edits.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<Vec<Line>>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source = Arc::default();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Inserts in order, returning the line it replaced.
    pub fn insert(&mut self, line: Line) -> Option<Line> {
        let source = Arc::make_mut(&mut self.source);
        match source.binary_search_by_key(&line.number(), Line::number) {
            Ok(index) => Some(std::mem::replace(&mut source[index], line)),
            Err(index) => {
                source.insert(index, line);
                None
            }
        }
    }

    pub fn find(&self, number: LineNumber) -> Result<Address, Error> {
        self.source
            .binary_search_by_key(&number, Line::number)
            .map_err(|_| error!(UndefinedLine))
    }

    pub fn get(&self, addr: Address) -> Option<&Line> {
        self.source.get(addr)
    }

    /// Text of one line, for completion in the line editor.
    pub fn line(&self, number: LineNumber) -> Option<String> {
        let addr = self.find(number).ok()?;
        self.get(addr).map(|line| line.to_string())
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.source.iter()
    }

    pub fn load_str(&mut self, line: &str) -> Result<(), Error> {
        if line.len() > MAX_LINE_LEN {
            return Err(error!(SyntaxError));
        }
        self.insert(Line::new(line)?);
        Ok(())
    }

    /// Reads the save format. Lines that are not `"<number> <content>"`
    /// are skipped.
    pub fn read_from<R: BufRead>(reader: R) -> std::io::Result<Listing> {
        let mut listing = Listing::default();
        for line in reader.lines() {
            let _ = listing.load_str(&line?);
        }
        Ok(listing)
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for line in self.lines() {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }
}
