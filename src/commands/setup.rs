use crate::config;
use miette::Result;

pub fn run() -> Result<()> {
    let config = config::load()?;
    let config_path = config::load_path()?;

    let mut output = String::new();

    output.push_str("# Gfetch configuration\n");
    output.push_str(&format!("# Config file: {}\n\n", config_path.display()));
    output.push_str(&format!("remote = {}\n", config.fetch.remote));
    output.push_str(&format!("refspec = {}\n", config.fetch.refspec));

    println!("{}", output);

    Ok(())
}
