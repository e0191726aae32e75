use std::io;
use std::process::{Command, Stdio};

/// Open `url` with the platform's default handler.
///
/// Only the launch is checked; whether a browser actually shows the page is
/// up to the handler.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    let mut command = launcher(url);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

fn launcher(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        // `start` treats the first quoted argument as a window title
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launcher_passes_url_last() {
        let cmd = launcher("http://localhost:8000/test-cors-fix.html");
        let last = cmd.get_args().last().unwrap();
        assert_eq!(last, "http://localhost:8000/test-cors-fix.html");
    }
}
