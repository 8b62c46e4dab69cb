// OutputType
use crate::error::Error;
use serde::{
    Serialize,
    Serializer,
};
use std::fmt;
use std::str::FromStr;

/// The formats the renderer can emit.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum OutputType {
    /// A JSON array of metric objects.
    Json,

    /// The same array, indented.
    PrettyJson,

    /// A bordered text table with a rule after every row.
    Text,

    /// A bordered text table without per-row rules.
    #[default]
    CompressedText,

    /// A markdown table.
    Markdown,

    /// A Backlog wiki table.
    Backlog,

    /// Tab-separated records with a header row.
    Tsv,

    /// A pie chart rendered to an HTML page.
    Chart,
}

impl OutputType {
    /// Return the string form used on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json           => "json",
            Self::PrettyJson     => "prettyjson",
            Self::Text           => "text",
            Self::CompressedText => "compressedtext",
            Self::Markdown       => "markdown",
            Self::Backlog        => "backlog",
            Self::Tsv            => "tsv",
            Self::Chart          => "chart",
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json"           => Ok(Self::Json),
            "prettyjson"     => Ok(Self::PrettyJson),
            "text"           => Ok(Self::Text),
            "compressedtext" => Ok(Self::CompressedText),
            "markdown"       => Ok(Self::Markdown),
            "backlog"        => Ok(Self::Backlog),
            "tsv"            => Ok(Self::Tsv),
            "chart"          => Ok(Self::Chart),
            _                => Err(Error::UnsupportedOutputType(s.to_string())),
        }
    }
}

impl Serialize for OutputType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_type_round_trip() {
        let tests = vec![
            OutputType::Json,
            OutputType::PrettyJson,
            OutputType::Text,
            OutputType::CompressedText,
            OutputType::Markdown,
            OutputType::Backlog,
            OutputType::Tsv,
            OutputType::Chart,
        ];

        for output_type in tests {
            let parsed: OutputType = output_type.as_str().parse().unwrap();

            assert_eq!(parsed, output_type);
        }
    }

    #[test]
    fn test_output_type_parse_err() {
        // Parsing is case sensitive.
        let tests = vec![
            "JSON",
            "prettyJSON",
            "unknown",
            "",
        ];

        for input in tests {
            assert!(input.parse::<OutputType>().is_err());
        }
    }
}
