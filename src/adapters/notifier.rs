use crate::domain::ports::Notifier;
use crate::utils::error::Result;
use std::process::Command;

/// Opens the scraped page with the platform's default handler.
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&self, url: &str) -> Result<()> {
        let mut command = opener_command(url)?;
        // 不等待開啟程式結束，瀏覽器由使用者自行關閉
        let child = command.spawn()?;
        drop(child);
        tracing::info!("🔗 Opened {} in browser", url);
        Ok(())
    }
}

fn opener_command(url: &str) -> Result<Command> {
    #[cfg(target_os = "macos")]
    {
        let mut command = Command::new("open");
        command.arg(url);
        Ok(command)
    }
    #[cfg(target_os = "linux")]
    {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        Ok(command)
    }
    #[cfg(target_os = "windows")]
    {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", "", url]);
        Ok(command)
    }
    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(crate::utils::error::EtlError::ProcessingError {
            message: format!("opening {} in a browser is not supported on this platform", url),
        })
    }
}

pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _url: &str) -> Result<()> {
        Ok(())
    }
}
