use std::path::PathBuf;

use clap::CommandFactory;

#[allow(dead_code)]
#[path = "src/cli_args.rs"]
mod cli_args;

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli_args.rs");

    let out_dir = std::env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| std::io::Error::other("OUT_DIR not set"))?;

    let man = clap_mangen::Man::new(cli_args::Cli::command());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    std::fs::write(out_dir.join("contrastly.1"), buffer)?;

    Ok(())
}
