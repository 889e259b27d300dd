use std::ffi::OsString;
use std::fmt;
use std::path::Path;
use std::process::Command;

/// Workflow engine executable, looked up on `PATH`
pub static SNAKEMAKE: &str = "snakemake";

/// A program and its arguments, ready to hand to an executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// `snakemake -s <snakefile> --cores <n> --rerun-incomplete --printshellcmds --configfile <cfg>`
    /// followed by `--dry-run` and `--unlock` when requested
    ///
    /// Snakemake gets the requested core count as is; only the ANGSD thread count is clamped.
    pub fn snakemake(snakefile: &Path, cores: i64, configfile: &Path, dry_run: bool, unlock: bool) -> Invocation {
        let mut args: Vec<OsString> = vec![
            "-s".into(),
            snakefile.into(),
            "--cores".into(),
            cores.to_string().into(),
            "--rerun-incomplete".into(),
            "--printshellcmds".into(),
            "--configfile".into(),
            configfile.into(),
        ];

        if dry_run {
            args.push("--dry-run".into());
        }

        if unlock {
            args.push("--unlock".into());
        }

        Invocation { program: SNAKEMAKE.into(), args }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_argument_order() {
        let inv = Invocation::snakemake(Path::new("Snakefile"), 8, Path::new("config_s1.json"), false, false);
        assert_eq!(
            inv.to_string(),
            "snakemake -s Snakefile --cores 8 --rerun-incomplete --printshellcmds --configfile config_s1.json"
        );
    }

    #[test]
    fn optional_flags_come_last() {
        let inv = Invocation::snakemake(Path::new("wf/Snakefile"), 200, Path::new("c.json"), true, true);
        let args: Vec<String> = inv.args.iter().map(|a| a.to_string_lossy().into_owned()).collect();
        assert_eq!(&args[args.len() - 2..], ["--dry-run", "--unlock"]);
        assert_eq!(args[3], "200");
    }

    #[test]
    fn unlock_without_dry_run() {
        let inv = Invocation::snakemake(Path::new("Snakefile"), 1, Path::new("c.json"), false, true);
        assert!(inv.to_string().ends_with("--configfile c.json --unlock"));
    }

    #[test]
    fn command_carries_program_and_args() {
        let inv = Invocation::snakemake(Path::new("Snakefile"), 4, Path::new("c.json"), false, false);
        let cmd = inv.command();
        assert_eq!(cmd.get_program(), "snakemake");
        assert_eq!(cmd.get_args().count(), 8);
    }
}
