//! A builder-style CSV reader that produces [`Sample`].

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::feature::{self, Feature};
use super::sample_struct::Sample;


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file to [`Sample`].
/// Columns whose every cell parses as `f64` become numeric features;
/// the others become categorical features
/// whose values are interned in first-appearance order.
///
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use minilearn::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::new()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
    exclude: Vec<String>,
}


impl<P, S> SampleReader<P, S> {
    /// Construct a new instance of [`SampleReader`].
    pub fn new() -> Self {
        Self {
            file: None,
            has_header: false,
            target: None,
            exclude: Vec::new(),
        }
    }


    /// Set the flag whether the file has the header row or not.
    /// Default is `false`.
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Drop the named columns while reading.
    /// The order of the remaining columns is preserved.
    pub fn exclude<T: AsRef<str>>(mut self, names: &[T]) -> Self {
        self.exclude = names.iter()
            .map(|n| n.as_ref().to_string())
            .collect();
        self
    }
}


impl<P, S> Default for SampleReader<P, S> {
    fn default() -> Self {
        Self::new()
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>,
{
    /// Set the column name that is used for the target label.
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>,
{
    /// Reads the file based on the arguments
    /// and returns `std::io::Result<Sample>`.
    /// This method consumes `self`.
    pub fn read(self) -> io::Result<Sample> {
        let file = self.file
            .expect("The file name is not set. Use `SampleReader::file`.");
        let target = self.target
            .expect(
                "Target (class) column is not specified. \
                 Use `SampleReader::target_feature`."
            );
        let target = target.as_ref();

        let (names, columns) = read_raw_columns(
            file.as_ref(), self.has_header
        )?;

        let mut features = Vec::with_capacity(columns.len());
        let mut target_column = None;
        for (name, cells) in names.into_iter().zip(columns) {
            if name == target {
                target_column = Some(feature::from_raw_column(name, cells));
            } else if !self.exclude.iter().any(|e| *e == name) {
                features.push(feature::from_raw_column(name, cells));
            }
        }

        let target_column = target_column
            .expect("The target column does not exist");
        let (target, classes) = match target_column {
            Feature::Numeric(feat) => (feat.values, Vec::new()),
            Feature::Categorical(feat) => (feat.values, feat.categories),
        };

        Ok(Sample::from_features(features, target, classes))
    }
}


/// Read the file into one `Vec<String>` per column.
/// Without a header row, columns are named `Feat. [k]`.
fn read_raw_columns(
    file: &Path,
    has_header: bool,
) -> io::Result<(Vec<String>, Vec<Vec<String>>)>
{
    let file = File::open(file)?;
    let mut lines = BufReader::new(file).lines();

    let mut names = Vec::new();
    if has_header {
        let line = lines.next()
            .expect("The file has no header row")?;
        names = line.split(',')
            .map(|name| name.trim().to_string())
            .collect();
    }

    let mut columns: Vec<Vec<String>> = Vec::new();

    // For each line of the file
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let cells = line.split(',')
            .map(|cell| cell.trim().to_string())
            .collect::<Vec<_>>();

        // If the header does not exist, construct a dummy one.
        if names.is_empty() {
            names = (1..=cells.len())
                .map(|k| format!("Feat. [{k}]"))
                .collect();
        }
        if columns.is_empty() {
            columns = vec![Vec::new(); names.len()];
        }

        assert_eq!(
            cells.len(),
            columns.len(),
            "A row has the wrong number of cells",
        );
        for (column, cell) in columns.iter_mut().zip(cells) {
            column.push(cell);
        }
    }

    Ok((names, columns))
}
