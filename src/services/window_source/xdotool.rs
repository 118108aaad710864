use crate::error::Result;
use crate::keynav_error;
use crate::utils::run_command;
use std::time::Duration;
use tracing::debug;

pub struct XdotoolClient {
    timeout: Duration,
}

impl XdotoolClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Активное окно. `None`, если фокус ни на одном окне (например, на корневом).
    pub async fn active_window(&self) -> Result<Option<u64>> {
        debug!("Получаем активное окно через xdotool");
        match run_command("xdotool", &["getactivewindow"], self.timeout).await {
            Ok(output) => parse_window_id(&output).map(Some),
            // xdotool завершается с ошибкой, когда _NET_ACTIVE_WINDOW пуст
            Err(crate::error::KeynavError::CommandFailed { stderr, .. }) => {
                debug!("xdotool не вернул активное окно: {}", stderr);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn raise(&self, id: u64) -> Result<()> {
        run_command("xdotool", &["windowraise", &id.to_string()], self.timeout).await?;
        Ok(())
    }

    pub async fn activate(&self, id: u64) -> Result<()> {
        run_command("xdotool", &["windowactivate", "--sync", &id.to_string()], self.timeout).await?;
        Ok(())
    }
}

pub(crate) fn parse_window_id(output: &str) -> Result<u64> {
    let value = output.trim();
    value
        .parse::<u64>()
        .map_err(|_| keynav_error!(parse, "xdotool вернул неверный id окна: '{}'", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_window_id() {
        assert_eq!(parse_window_id("65011715\n").unwrap(), 65011715);
        assert!(parse_window_id("").is_err());
        assert!(parse_window_id("0x3e00003").is_err());
    }
}
