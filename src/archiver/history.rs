extern crate serde_json;

use crate::error::{Error, Result};
use std::{
    collections::HashSet,
    fs::{self, File},
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};

// Insertion-ordered so the persisted file is stable across runs; the set
// index keeps membership checks O(1).
#[derive(Debug, Default)]
pub struct History {
    order: Vec<String>,
    index: HashSet<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = match File::open(path) {
            Ok(f) => f,
            // Absence is the valid initial state.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(Error::Io(e)),
        };
        let entries: Vec<String> =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::HistoryCorrupt {
                path: path.to_owned(),
                source: e,
            })?;
        let mut history = Self::new();
        for id in entries {
            if !history.add(&id) {
                return Err(Error::HistoryDuplicate {
                    path: path.to_owned(),
                    id,
                });
            }
        }
        Ok(history)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = Path::new(&tmp);
        let write = |path: &Path| -> std::io::Result<()> {
            let mut out = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut out, &self.order)?;
            out.flush()
        };
        write(tmp).map_err(Error::Io)?;
        fs::rename(tmp, path).map_err(Error::Io)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    pub fn add(&mut self, id: &str) -> bool {
        if !self.index.insert(id.to_owned()) {
            return false;
        }
        self.order.push(id.to_owned());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
    pub fn len(&self) -> usize {
        self.order.len()
    }
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
