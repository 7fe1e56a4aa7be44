use derive_more::Display;

/// Unstructured TLE, one name line and its two element lines
/// https://en.wikipedia.org/wiki/Two-line_element_set
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Display)]
#[display(fmt = "{}\n{}\n{}", "satellite_name", "line1", "line2")]
pub struct UnstructuredTle {
    /// Name line as found in the input, untrimmed
    pub satellite_name: String,
    pub line1: String,
    pub line2: String,
}

impl UnstructuredTle {
    pub fn new<N, L1, L2>(satellite_name: N, line1: L1, line2: L2) -> Self
    where
        N: Into<String>,
        L1: Into<String>,
        L2: Into<String>,
    {
        Self {
            satellite_name: satellite_name.into(),
            line1: line1.into(),
            line2: line2.into(),
        }
    }

    /// The name line without surrounding whitespace
    pub fn name(&self) -> &str {
        self.satellite_name.trim()
    }
}
