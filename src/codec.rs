//! A line based text format for trees.
//!
//! The tree is written in pre-order, one record per line:
//!
//! - `0 <value>` for a node, followed by the records of its left subtree and then its right
//!   subtree.
//! - `1` for an absent child (or an empty tree).
//!
//! Every missing child gets its own `1` record so any shape can be read back exactly, including
//! trees built by hand through [`CursorMut`](crate::CursorMut). Values are written with
//! [`Display`](fmt::Display) and read with [`FromStr`]; everything after the first space is the
//! value, so strings may contain spaces (but not line breaks).
//!
//! ```text
//!     2            0 2
//!    / \           0 1
//!   1   3    =>    1
//!                  1
//!                  0 3
//!                  1
//!                  1
//! ```
//!
//! # Examples
//!
//! ```
//! use binarytree::Tree;
//!
//! let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
//!
//! let mut text = Vec::new();
//! tree.write_to(&mut text).unwrap();
//! assert_eq!(text, b"0 2\n0 1\n1\n1\n0 3\n1\n1\n");
//!
//! let read_back = Tree::read_from(text.as_slice()).unwrap();
//! assert_eq!(read_back, tree);
//! ```

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{Error, Result};
use crate::tree::{Link, Node, Tree};

/// Flag starting the record of a node that is present.
const PRESENT: &str = "0";
/// Flag making up the record of an absent child.
const ABSENT: &str = "1";

impl<T> Tree<T> {
    /// Writes the tree to the file at `path`, creating or truncating it. Every value is checked
    /// before the file is touched, so an unencodable value leaves an existing file as it was.
    ///
    /// # Errors
    ///
    /// - [`Error::UnencodableValue`] if a value's text contains a line break.
    /// - [`Error::Io`] if the file can't be created or written.
    pub fn serialize<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
        T: fmt::Display,
    {
        let path = path.as_ref();
        let io_error = |source| Error::Io {
            path: path.to_owned(),
            source,
        };

        self.check_encodable()?;
        let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
        write_link(&self.root, &mut writer)
            .and_then(|()| writer.flush())
            .map_err(io_error)?;

        debug!(path = %path.display(), nodes = self.len(), "serialized tree");
        Ok(())
    }

    /// Reads a tree from the file at `path`.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] if the file can't be opened or read, and any of the format errors of
    /// [`Tree::read_from`].
    pub fn deserialize<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
        T: FromStr,
        T::Err: fmt::Display,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;

        let tree = Self::read_from(BufReader::new(file)).map_err(|e| match e {
            Error::Stream(source) => Error::Io {
                path: path.to_owned(),
                source,
            },
            e => e,
        })?;

        debug!(path = %path.display(), nodes = tree.len(), "deserialized tree");
        Ok(tree)
    }

    /// Fails on the first value (in-order) whose text would span more than one line.
    fn check_encodable(&self) -> Result<()>
    where
        T: fmt::Display,
    {
        match self
            .iter()
            .map(ToString::to_string)
            .find(|text| text.contains(|c: char| c == '\n' || c == '\r'))
        {
            Some(text) => Err(Error::UnencodableValue { text }),
            None => Ok(()),
        }
    }

    /// Writes the records of the tree to `writer`. Nothing is written if a value can't be encoded.
    ///
    /// # Errors
    ///
    /// - [`Error::UnencodableValue`] if a value's text contains a line break.
    /// - [`Error::Stream`] for whatever `writer` reports.
    pub fn write_to<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
        T: fmt::Display,
    {
        self.check_encodable()?;
        write_link(&self.root, writer)?;
        Ok(())
    }

    /// Reads the records of one tree from `reader`. Anything after the last record of the tree is
    /// left unread. If reading fails nothing built so far is kept.
    ///
    /// # Errors
    ///
    /// - [`Error::Stream`] if `reader` fails.
    /// - [`Error::UnexpectedEof`] if the stream ends before the tree is complete.
    /// - [`Error::UnknownFlag`] for a record that isn't a `0` or `1` record.
    /// - [`Error::InvalidValue`] if a value doesn't parse as a `T`.
    pub fn read_from<R>(reader: R) -> Result<Self>
    where
        R: BufRead,
        T: FromStr,
        T::Err: fmt::Display,
    {
        let mut records = Records {
            lines: reader.lines(),
            line: 0,
        };
        Ok(Self {
            root: read_link(&mut records)?,
        })
    }
}

fn write_link<T, W>(link: &Link<T>, writer: &mut W) -> io::Result<()>
where
    T: fmt::Display,
    W: Write,
{
    let Some(node) = link.as_deref() else {
        return writeln!(writer, "{}", ABSENT);
    };

    writeln!(writer, "{} {}", PRESENT, node.value)?;
    write_link(&node.left, writer)?;
    write_link(&node.right, writer)
}

/// The lines of a serialized tree along with how many have been consumed.
struct Records<R> {
    lines: io::Lines<R>,
    line: usize,
}

impl<R> Records<R>
where
    R: BufRead,
{
    /// Reads the next record. `Ok(None)` is an absent child.
    fn next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.line += 1;
        let line = self
            .lines
            .next()
            .ok_or(Error::UnexpectedEof { line: self.line })??;

        let (flag, text) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        match flag {
            ABSENT => Ok(None),
            PRESENT => text.parse().map(Some).map_err(|e: T::Err| Error::InvalidValue {
                line: self.line,
                text: text.to_owned(),
                reason: e.to_string(),
            }),
            _ => Err(Error::UnknownFlag {
                line: self.line,
                flag: flag.to_owned(),
            }),
        }
    }
}

fn read_link<T, R>(records: &mut Records<R>) -> Result<Link<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
    R: BufRead,
{
    let Some(value) = records.next()? else {
        return Ok(None);
    };

    let mut node = Node::new_boxed(value);
    node.left = read_link(records)?;
    node.right = read_link(records)?;
    Ok(Some(node))
}
