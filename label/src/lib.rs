//! Reader and writer of `.gt_data.txt` box annotation files.
//!
//! Each line holds one box as `xmin ymin xmax ymax` followed by five
//! placeholder columns. Only the first four columns are read back, and the
//! placeholders are always written as [PLACEHOLDER_COLUMNS].

use bbox::{prelude::*, PixelBox, TLBR};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write as _},
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Class id, track id, mask name and two flags appended to every box.
pub const PLACEHOLDER_COLUMNS: &str = "0 -1 nomask 0 0";

/// Errors raised while reading or writing annotation files.
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("annotation file '{}' does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("malformed line {line} in '{}': {reason}", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        reason: String,
    },

    #[error("I/O error on annotation file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Loads the boxes of an annotation file in file order.
///
/// Blank lines are skipped.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<PixelBox>, LabelError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LabelError::NotFound {
            path: path.to_owned(),
        },
        _ => LabelError::Io {
            path: path.to_owned(),
            source,
        },
    })?;

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            parse_line(line).map_err(|reason| LabelError::Parse {
                path: path.to_owned(),
                line: index + 1,
                reason,
            })
        })
        .collect()
}

/// Writes `bboxes` to `path`, replacing any existing file.
pub fn save(path: impl AsRef<Path>, bboxes: &[PixelBox]) -> Result<(), LabelError> {
    let path = path.as_ref();
    let io_error = |source| LabelError::Io {
        path: path.to_owned(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_error)?);
    for bbox in bboxes {
        writeln!(writer, "{}", format_line(bbox)).map_err(io_error)?;
    }
    writer.flush().map_err(io_error)?;

    Ok(())
}

/// Parses the leading `xmin ymin xmax ymax` columns of a line.
///
/// Coordinates must fit in `i32`, which leaves the remaps room to compute
/// in `i64` without overflow.
pub fn parse_line(line: &str) -> Result<PixelBox, String> {
    let mut tokens = line.split_whitespace();
    let mut ltrb = [0i64; 4];

    for (index, value) in ltrb.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or_else(|| format!("expect at least 4 columns, but get {}", index))?;
        let coord: i32 = token.parse().map_err(|_| {
            format!(
                "column {} '{}' is not a 32-bit integer",
                index + 1,
                token
            )
        })?;
        *value = coord.into();
    }

    Ok(TLBR::from_ltrb(ltrb))
}

/// Formats a box as one annotation line without the line break.
pub fn format_line(bbox: &PixelBox) -> String {
    let [l, t, r, b] = bbox.ltrb();
    format!("{} {} {} {} {}", l, t, r, b, PLACEHOLDER_COLUMNS)
}
