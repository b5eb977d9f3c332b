extern crate flate2;
extern crate regex;

use crate::angle::AngleUnit;
use crate::data::SkyRecord;
use crate::error::CoordError;
use crate::parse;

use regex::Regex;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::io::{BufRead, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use glob::{glob, Pattern};

#[allow(non_camel_case_types)]
#[derive(Copy, Debug, Clone, Eq, PartialEq, Hash)]
pub enum ColId {
    source_id,
    lon,
    lat,
}

impl ColId {
    pub fn to_str(&self) -> &str {
        match self {
            ColId::source_id => "source_id",
            ColId::lon => "lon",
            ColId::lat => "lat",
        }
    }
    pub fn from_str(input: &str) -> Option<ColId> {
        match input {
            "source_id" => Some(ColId::source_id),
            "sourceid" => Some(ColId::source_id),
            "id" => Some(ColId::source_id),
            "hip" => Some(ColId::source_id),
            "name" => Some(ColId::source_id),
            "ra" => Some(ColId::lon),
            "lon" => Some(ColId::lon),
            "l" => Some(ColId::lon),
            "glon" => Some(ColId::lon),
            "elon" => Some(ColId::lon),
            "dec" => Some(ColId::lat),
            "de" => Some(ColId::lat),
            "lat" => Some(ColId::lat),
            "b" => Some(ColId::lat),
            "glat" => Some(ColId::lat),
            "elat" => Some(ColId::lat),
            _ => None,
        }
    }
}

/**
 * Parses a comma-separated column layout into a map from
 * column to its position. Columns with other names are
 * allowed and ignored, but lon and lat must be present.
 **/
pub fn parse_columns(columns: &str) -> Result<HashMap<ColId, usize>, CoordError> {
    let mut indices = HashMap::new();
    for (i, col) in columns.split(',').enumerate() {
        match ColId::from_str(col.trim()) {
            Some(col_id) => {
                indices.entry(col_id).or_insert(i);
            }
            None => log::debug!("Ignoring column '{}' at position {}", col, i),
        }
    }
    if !indices.contains_key(&ColId::lon) {
        return Err(CoordError::MissingColumn("lon"));
    }
    if !indices.contains_key(&ColId::lat) {
        return Err(CoordError::MissingColumn("lat"));
    }
    Ok(indices)
}

pub struct Loader {
    // Regular expression to separate values in file
    pub sep: Regex,
    // Maximum number of files to load in a directory
    pub max_files: i32,
    // Maximum number of records to load per file
    pub max_records: i32,
    // Whether files start with a header line
    pub header: bool,
    // Unit of the angles in the files
    pub unit: AngleUnit,
    // Indices
    pub indices: HashMap<ColId, usize>,

    // Counts
    pub total_processed: u64,
    pub total_loaded: u64,
    pub rejected: u64,
}

impl Loader {
    pub fn new(
        sep: &str,
        max_files: i32,
        max_records: i32,
        header: bool,
        unit: AngleUnit,
        columns: &str,
    ) -> Result<Self, CoordError> {
        Ok(Loader {
            sep: Regex::new(sep)?,
            max_files,
            max_records,
            header,
            unit,
            indices: parse_columns(columns)?,
            total_processed: 0,
            total_loaded: 0,
            rejected: 0,
        })
    }

    /**
     * Loads a single file, or all files in the given directory.
     **/
    pub fn load_dir(&mut self, dir: &str) -> Result<Vec<SkyRecord>, CoordError> {
        let path = Path::new(dir);
        if !path.exists() {
            return Err(CoordError::PathNotFound(dir.to_string()));
        }
        let mut list: Vec<SkyRecord> = Vec::new();

        if path.is_file() {
            self.load_file(dir, &mut list, 1, 1)?;
        } else {
            // glob directory, escaping any pattern characters in its name
            let mut dir_glob: String = Pattern::escape(dir);
            dir_glob.push_str("/*");
            let mut files: Vec<String> = Vec::new();
            for entry in glob(&dir_glob)? {
                match entry {
                    Ok(path) => {
                        let file = path.to_string_lossy().to_string();
                        if Self::accepts(&file) {
                            files.push(file);
                        }
                    }
                    Err(e) => log::error!("Error: {:?}", e),
                }
            }
            if self.max_files >= 0 {
                files.truncate(self.max_files as usize);
            }
            let count = files.len();
            if count == 0 {
                log::warn!("No csv, txt or gz files found in {}", dir);
            }
            for (i, file) in files.iter().enumerate() {
                self.load_file(file, &mut list, i + 1, count)?;
            }
        }
        self.log_totals();
        Ok(list)
    }

    fn accepts(file: &str) -> bool {
        file.ends_with(".gz") || file.ends_with(".csv") || file.ends_with(".txt")
    }

    /**
     * Loads a single file, being it csv.gz, csv or txt.
     **/
    pub fn load_file(
        &mut self,
        file: &str,
        list: &mut Vec<SkyRecord>,
        file_num: usize,
        file_count: usize,
    ) -> Result<(), CoordError> {
        let mut total: usize = 0;
        let mut loaded: usize = 0;
        let mut skipped: usize = 0;

        let is_gz = file.ends_with(".gz") || file.ends_with(".gzip");
        let f = File::open(file)?;
        let reader: Box<dyn Read> = if is_gz {
            Box::new(GzDecoder::new(f))
        } else {
            Box::new(f)
        };

        for (i, line) in io::BufReader::new(reader).lines().enumerate() {
            let line = line?;
            // Skip header and blank lines
            if (self.header && i == 0) || line.trim().is_empty() {
                continue;
            }
            if self.max_records >= 0 && total >= self.max_records as usize {
                break;
            }
            total += 1;
            match self.parse_line(&line, list.len()) {
                Some(record) => {
                    list.push(record);
                    loaded += 1;
                }
                None => skipped += 1,
            }
            if total % 100000 == 0 {
                log::debug!("   object {}", total);
            }
        }
        self.total_processed += total as u64;
        self.total_loaded += loaded as u64;
        self.rejected += skipped as u64;
        self.log_file(loaded, total, skipped, file, file_num, file_count);
        Ok(())
    }

    fn log_file(
        &self,
        loaded: usize,
        total: usize,
        skipped: usize,
        file: &str,
        file_num: usize,
        file_count: usize,
    ) {
        let name = Path::new(file)
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| file.to_string());
        log::info!(
            "{}/{} ({:.3}%): {} -> {}/{} positions ({} skipped)",
            file_num,
            file_count,
            100.0 * file_num as f32 / file_count as f32,
            name,
            loaded,
            total,
            skipped
        );
    }

    fn log_totals(&self) {
        log::info!(
            "Processed {} lines, loaded {} positions, rejected {}",
            self.total_processed,
            self.total_loaded,
            self.rejected
        );
    }

    fn get_index(&self, col_id: &ColId) -> usize {
        match self.indices.get(col_id) {
            Some(value) => *value,
            // Set out of range so that tokens.get() produces None
            None => usize::MAX,
        }
    }

    // Parses a line using self.indices. Records without a
    // finite position are rejected.
    fn parse_line(&self, line: &str, seq: usize) -> Option<SkyRecord> {
        let tokens: Vec<&str> = self.sep.split(line.trim()).collect();

        let lon = parse::parse_f64(tokens.get(self.get_index(&ColId::lon)));
        let lat = parse::parse_f64(tokens.get(self.get_index(&ColId::lat)));
        if !lon.is_finite() || !lat.is_finite() {
            log::debug!("Rejecting line with invalid position: {}", line);
            return None;
        }
        let id = parse::parse_string(tokens.get(self.get_index(&ColId::source_id)))
            .unwrap_or_else(|| seq.to_string());

        Some(SkyRecord {
            id,
            lon: self.unit.to_radians(lon),
            lat: self.unit.to_radians(lat),
        })
    }
}
