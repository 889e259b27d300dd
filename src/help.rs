//! Detailed help shown after the option list

use serde::Serialize;
use tinytemplate::{format_unescaped, TinyTemplate};

use crate::options::{DEFAULT_CORES, DEFAULT_MIN_DEPTH, DEFAULT_OUTDIR, DEFAULT_SCRIPTS, DEFAULT_SNAKEFILE};
use crate::request::threshold::{DEFAULT_HET_THRESHOLD, DEFAULT_ROH_MIN};

/// Rendering context for the help text
#[derive(Serialize)]
struct HelpContext {
    program: String,
    outdir: String,
    scripts: String,
    min_depth: i64,
    cores: i64,
    threshold: f64,
    roh_min: f64,
    snakefile: String,
}

/// Render the examples and file format notes using TinyTemplate
pub fn render_help(program: &str) -> Result<String, tinytemplate::error::Error> {
    /// included help template
    static HELP: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/templates/help.txt"));
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("help", HELP)?;

    let context = HelpContext {
        program: program.to_string(),
        outdir: DEFAULT_OUTDIR.to_string(),
        scripts: DEFAULT_SCRIPTS.to_string(),
        min_depth: DEFAULT_MIN_DEPTH,
        cores: DEFAULT_CORES,
        threshold: DEFAULT_HET_THRESHOLD,
        roh_min: DEFAULT_ROH_MIN,
        snakefile: DEFAULT_SNAKEFILE.to_string(),
    };

    tt.render("help", &context)
}
