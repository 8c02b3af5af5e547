use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchDefaults,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FetchDefaults {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_refspec")]
    pub refspec: String,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_refspec() -> String {
    "HEAD".to_string()
}

impl Default for FetchDefaults {
    fn default() -> Self {
        FetchDefaults {
            remote: default_remote(),
            refspec: default_refspec(),
        }
    }
}

pub fn load() -> miette::Result<Config> {
    let config: Config =
        confy::load("gfetch", None).map_err(|e| miette::miette!("Failed to load config: {}", e))?;
    Ok(config)
}

pub fn load_path() -> miette::Result<std::path::PathBuf> {
    let path = confy::get_configuration_file_path("gfetch", None)
        .map_err(|e| miette::miette!("Failed to get config path: {}", e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.fetch.remote, "origin");
        assert_eq!(config.fetch.refspec, "HEAD");
    }
}
