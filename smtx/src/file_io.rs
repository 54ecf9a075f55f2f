//! Reading and writing matrix text files

use crate::config::IoConfig;
use crate::error::{Error, Result};
use smtx_core::{MatrixElement, SmtxError, SparseMatrix};
use std::borrow::Cow;
use std::{fs, io, path::Path};

/// Read an `i64` matrix from a text file
///
/// A missing file is reported as [`SmtxError::NotFound`]; other I/O failures
/// as [`Error::Io`]; malformed content as [`SmtxError::Format`].
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    read_matrix_as(path)
}

/// Read a matrix with a chosen element type from a text file
pub fn read_matrix_as<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::Matrix(SmtxError::NotFound {
            path: path.display().to_string(),
        }),
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let matrix = SparseMatrix::from_text(&content)?;
    log::debug!(
        "loaded {}x{} {} matrix with {} entries from {}",
        matrix.rows(),
        matrix.cols(),
        T::type_name(),
        matrix.nnz(),
        path.display()
    );
    Ok(matrix)
}

/// Write a matrix to a text file, replacing any existing file
pub fn write_matrix<T: MatrixElement, P: AsRef<Path>>(
    path: P,
    matrix: &SparseMatrix<T>,
    config: &IoConfig,
) -> Result<()> {
    let path = path.as_ref();
    let io_error = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if config.create_dirs {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
    }

    let matrix = if config.prune_zeros {
        let mut pruned = matrix.clone();
        pruned.prune_zeros();
        Cow::Owned(pruned)
    } else {
        Cow::Borrowed(matrix)
    };

    fs::write(path, matrix.to_text()).map_err(io_error)?;
    log::info!(
        "wrote {}x{} matrix with {} entries to {}",
        matrix.rows(),
        matrix.cols(),
        matrix.nnz(),
        path.display()
    );
    Ok(())
}
