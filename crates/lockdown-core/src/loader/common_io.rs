// crates/lockdown-core/src/loader/common_io.rs
use crate::error::{LockdownError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the name
/// ends in `.gz`.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        LockdownError::NotFound(format!("{} could not be opened: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);
    let gzipped = path.extension().is_some_and(|ext| ext == "gz");

    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(LockdownError::InvalidData(format!(
            "{} is gzipped but 'compact' is disabled",
            path.display()
        )))
    }
}

/// All lines of a text file (or `.gz` text file).
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let reader = BufReader::new(open_stream(path)?);
    reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(LockdownError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_plain_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# header").unwrap();
        writeln!(file, "France 2020-03-17 2020-05-11 National").unwrap();
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "France 2020-03-17 2020-05-11 National");
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = read_lines(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, LockdownError::NotFound(_)));
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzipped_dataset_round_trips() {
        use flate2::{write::GzEncoder, Compression};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.json.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(
            br#"[{"iso2":"FR","iso3":"FRA","name":"France","continent":"Europe"}]"#,
        )
        .unwrap();
        enc.finish().unwrap();

        let db = crate::countries::CountryDb::load_from_path(&path).unwrap();
        assert_eq!(db.len(), 1);
        assert_eq!(db.lookup("france").unwrap().iso2, "FR");
    }
}
