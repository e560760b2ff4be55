use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

/// Copies shareable routes to the system clipboard
pub struct Clipboard {
    system: Option<arboard::Clipboard>,
    /// When false nothing leaves the process
    use_system: bool,
    #[cfg(test)]
    last_copied: String,
}

impl Clipboard {
    pub fn new() -> Self {
        Self {
            system: arboard::Clipboard::new().ok(),
            use_system: true,
            #[cfg(test)]
            last_copied: String::new(),
        }
    }

    /// A clipboard that only remembers what was copied
    #[cfg(test)]
    pub fn offline() -> Self {
        Self {
            system: None,
            use_system: false,
            last_copied: String::new(),
        }
    }

    #[cfg(test)]
    pub fn last_copied(&self) -> &str {
        &self.last_copied
    }

    /// Copy `text`, returning whether any system clipboard accepted it.
    ///
    /// CLI tools go first: wl-copy and xclip keep the selection alive after
    /// the process exits, arboard does not on X11.
    pub fn copy(&mut self, text: &str) -> bool {
        #[cfg(test)]
        {
            self.last_copied = text.to_string();
        }
        if !self.use_system {
            return false;
        }

        if Self::copy_with_cli(text) {
            return true;
        }

        match self.system.as_mut() {
            Some(cb) => match cb.set_text(text.to_string()) {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "failed to set system clipboard");
                    false
                }
            },
            None => false,
        }
    }

    /// Copy using wl-copy (Wayland) or xclip (X11)
    fn copy_with_cli(text: &str) -> bool {
        let commands: &[&[&str]] = &[&["wl-copy"], &["xclip", "-selection", "clipboard"]];

        for cmd in commands {
            let Ok(mut child) = Command::new(cmd[0])
                .args(&cmd[1..])
                .stdin(Stdio::piped())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
            else {
                continue;
            };

            if let Some(stdin) = child.stdin.as_mut() {
                let _ = stdin.write_all(text.as_bytes());
            }
            // close stdin so the tool sees EOF
            drop(child.stdin.take());

            if matches!(child.wait(), Ok(status) if status.success()) {
                debug!(tool = cmd[0], "copied with clipboard tool");
                return true;
            }
        }
        false
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_clipboard_remembers_text() {
        let mut clipboard = Clipboard::offline();
        assert!(!clipboard.copy("/instructions/add"));
        assert_eq!(clipboard.last_copied(), "/instructions/add");
    }
}
