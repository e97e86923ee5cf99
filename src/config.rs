use std::env;
use std::path::PathBuf;

pub const USERS_FILE: &str = "usuarios.csv";
pub const ROUTINES_FILE: &str = "rutinas_personalizadas.csv";
pub const LOGS_FILE: &str = "progreso_rutina.csv";

#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(USERS_FILE)
    }

    pub fn routines_path(&self) -> PathBuf {
        self.data_dir.join(ROUTINES_FILE)
    }

    pub fn logs_path(&self) -> PathBuf {
        self.data_dir.join(LOGS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_paths_live_under_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/var/lib/rutina"),
            host: "0.0.0.0".to_string(),
            port: 8501,
        };

        assert_eq!(config.server_addr(), "0.0.0.0:8501");
        assert_eq!(
            config.users_path(),
            PathBuf::from("/var/lib/rutina/usuarios.csv")
        );
        assert_eq!(
            config.routines_path(),
            PathBuf::from("/var/lib/rutina/rutinas_personalizadas.csv")
        );
        assert_eq!(
            config.logs_path(),
            PathBuf::from("/var/lib/rutina/progreso_rutina.csv")
        );
    }
}
