use std::path::PathBuf;

use clap::{Parser, Subcommand};
use svc_bootstrap::{CliArgs, OutputFormat};

/// Calculator and string utilities from the command line
#[derive(Parser, Debug)]
#[command(name = "svc-cli")]
#[command(about = "Calculator and string utilities from the command line")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Result format (overrides config)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    pub print_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Values that flow into the layered configuration.
    #[must_use]
    pub fn overrides(&self) -> CliArgs {
        CliArgs {
            config: self.config.clone(),
            verbose: self.verbose,
            output: self.output,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a calculator operation
    Calc {
        #[command(subcommand)]
        op: CalcOp,
    },
    /// Run a string utility
    Text {
        #[command(subcommand)]
        op: TextOp,
    },
    /// Validate configuration and exit
    Check,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CalcOp {
    /// Sum of two numbers
    #[command(allow_negative_numbers = true)]
    Add { a: f64, b: f64 },
    /// Difference of two numbers
    #[command(allow_negative_numbers = true)]
    Subtract { a: f64, b: f64 },
    /// Product of two numbers
    #[command(allow_negative_numbers = true)]
    Multiply { a: f64, b: f64 },
    /// Quotient of two numbers
    #[command(allow_negative_numbers = true)]
    Divide { a: f64, b: f64 },
    /// `base` raised to `exponent`
    #[command(allow_negative_numbers = true)]
    Power { base: f64, exponent: f64 },
    /// Square root
    #[command(allow_negative_numbers = true)]
    Sqrt { x: f64 },
    /// Factorial of a non-negative integer
    #[command(allow_negative_numbers = true)]
    Factorial { n: i64 },
    /// Arithmetic mean of a list
    #[command(allow_negative_numbers = true)]
    Average { values: Vec<f64> },
    /// Largest value of a list
    #[command(allow_negative_numbers = true)]
    Max { values: Vec<f64> },
    /// Smallest value of a list
    #[command(allow_negative_numbers = true)]
    Min { values: Vec<f64> },
    /// Greatest common divisor
    #[command(allow_negative_numbers = true)]
    Gcd { a: i64, b: i64 },
    /// Least common multiple
    #[command(allow_negative_numbers = true)]
    Lcm { a: i64, b: i64 },
    /// Primality check
    #[command(allow_negative_numbers = true)]
    IsPrime { n: i64 },
}

impl CalcOp {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Subtract { .. } => "subtract",
            Self::Multiply { .. } => "multiply",
            Self::Divide { .. } => "divide",
            Self::Power { .. } => "power",
            Self::Sqrt { .. } => "sqrt",
            Self::Factorial { .. } => "factorial",
            Self::Average { .. } => "average",
            Self::Max { .. } => "max",
            Self::Min { .. } => "min",
            Self::Gcd { .. } => "gcd",
            Self::Lcm { .. } => "lcm",
            Self::IsPrime { .. } => "is_prime",
        }
    }
}

/// String operations. An omitted text argument is passed on as absent input.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum TextOp {
    /// Reverse the characters
    Reverse { text: Option<String> },
    /// Check whether the text reads the same backwards
    IsPalindrome { text: Option<String> },
    /// Count ASCII vowels
    CountVowels { text: Option<String> },
    /// Title-case every word
    TitleCase { text: Option<String> },
    /// Drop repeated characters, keeping first occurrences
    RemoveDuplicates { text: Option<String> },
    /// Longest whitespace-separated word
    LongestWord { text: Option<String> },
    /// Number of whitespace-separated words
    CountWords { text: Option<String> },
    /// Check whether two texts are anagrams
    IsAnagram {
        first: Option<String>,
        second: Option<String>,
    },
    /// Capitalize every word and collapse whitespace
    CapitalizeWords { text: Option<String> },
    /// Count non-overlapping occurrences of `needle`
    CountOccurrences {
        text: Option<String>,
        needle: Option<String>,
    },
    /// Validate an email address
    IsValidEmail { email: Option<String> },
    /// Extract runs of digits as numbers
    ExtractNumbers { text: Option<String> },
    /// Strip everything except letters, digits and spaces
    RemoveSpecialChars { text: Option<String> },
}

impl TextOp {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Reverse { .. } => "reverse",
            Self::IsPalindrome { .. } => "is_palindrome",
            Self::CountVowels { .. } => "count_vowels",
            Self::TitleCase { .. } => "to_title_case",
            Self::RemoveDuplicates { .. } => "remove_duplicates",
            Self::LongestWord { .. } => "find_longest_word",
            Self::CountWords { .. } => "count_words",
            Self::IsAnagram { .. } => "is_anagram",
            Self::CapitalizeWords { .. } => "capitalize_words",
            Self::CountOccurrences { .. } => "count_occurrences",
            Self::IsValidEmail { .. } => "is_valid_email",
            Self::ExtractNumbers { .. } => "extract_numbers",
            Self::RemoveSpecialChars { .. } => "remove_special_chars",
        }
    }
}
