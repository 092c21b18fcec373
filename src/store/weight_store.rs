//! Raw binary persistence for classifier weights.
//!
//! The file is nothing but `rows * cols` little-endian IEEE-754 doubles in
//! row-major order (output unit outer, input pixel inner). There is no
//! header, size prefix or checksum, so the reader must already know the
//! shape it expects.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::{info, warn};

use crate::error::Result;
use crate::math::matrix::Matrix;

const WEIGHT_BYTES: usize = std::mem::size_of::<f64>();

/// Writes every weight of `weights` to `path`, truncating any existing file.
pub fn save<P: AsRef<Path>>(weights: &Matrix, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for w in weights.as_slice() {
        writer.write_all(&w.to_le_bytes())?;
    }
    writer.flush()?;
    info!("saved {} weights to {}", weights.len(), path.display());
    Ok(())
}

/// Reads an `output_size × input_size` matrix from `path`.
///
/// Entries past the end of a short file stay at 0.0; see [`load_into`].
pub fn load<P: AsRef<Path>>(path: P, input_size: usize, output_size: usize) -> Result<Matrix> {
    let mut weights = Matrix::zeros(output_size, input_size);
    load_into(path, &mut weights)?;
    Ok(weights)
}

/// Overwrites `weights` in storage order with the doubles read from `path`.
///
/// The file is read in full before anything is applied, so an I/O error
/// leaves `weights` untouched. A file holding fewer than `weights.len()`
/// doubles is not an error: only the leading weights are replaced and the
/// rest keep whatever value they had. A trailing fragment shorter than one
/// double is ignored; a raw `istream::read` into the weight buffer would
/// instead copy those bytes over the low bytes of the next weight. Bytes
/// beyond `weights.len()` doubles are never read.
pub fn load_into<P: AsRef<Path>>(path: P, weights: &mut Matrix) -> Result<()> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let wanted = (weights.len() * WEIGHT_BYTES) as u64;

    let mut bytes = Vec::with_capacity(wanted as usize);
    BufReader::new(file).take(wanted).read_to_end(&mut bytes)?;

    let chunks = bytes.chunks_exact(WEIGHT_BYTES);
    let read = chunks.len();
    for (w, chunk) in weights.as_mut_slice().iter_mut().zip(chunks) {
        let mut buf = [0u8; WEIGHT_BYTES];
        buf.copy_from_slice(chunk);
        *w = f64::from_le_bytes(buf);
    }

    if read < weights.len() {
        warn!(
            "short weight file {}: read {} of {} weights, the remaining {} keep their previous values",
            path.display(),
            read,
            weights.len(),
            weights.len() - read
        );
    } else {
        info!("loaded {} weights from {}", read, path.display());
    }
    Ok(())
}
