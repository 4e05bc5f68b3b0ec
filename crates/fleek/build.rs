//! Render man pages and shell completion scripts into `OUT_DIR`.

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::Shell;

// cli.rs only needs clap + clap_complete, both build-dependencies.
#[allow(dead_code)]
#[path = "src/cli.rs"]
mod cli;

const BIN: &str = "fleek";
const SHELLS: [Shell; 3] = [Shell::Bash, Shell::Zsh, Shell::Fish];

fn main() -> io::Result<()> {
    println!("cargo::rerun-if-changed=src/cli.rs");

    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::other("OUT_DIR is only set when run by Cargo"))?;

    let mut cmd = cli::Cli::command();
    write_completions(&mut cmd, &out_dir.join("completions"))?;
    write_manpages(&cmd, &out_dir.join("man"))
}

fn write_completions(cmd: &mut clap::Command, dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)?;
    for shell in SHELLS {
        clap_complete::generate_to(shell, cmd, BIN, dir)?;
    }
    Ok(())
}

/// One page per visible command: `fleek.1`, `fleek-sites.1`, `fleek-sites-list.1`, ...
fn write_manpages(root: &clap::Command, dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)?;

    let mut pending = vec![(BIN.to_owned(), root.clone())];
    while let Some((page, cmd)) = pending.pop() {
        for sub in cmd.get_subcommands().filter(|sub| !sub.is_hide_set()) {
            let name = format!("{page}-{}", sub.get_name());
            pending.push((name.clone(), sub.clone().name(name)));
        }

        let mut buf = Vec::new();
        clap_mangen::Man::new(cmd).render(&mut buf)?;
        std::fs::write(dir.join(format!("{page}.1")), buf)?;
    }
    Ok(())
}
