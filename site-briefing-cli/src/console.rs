//! Terminal implementation of the reporting surface

use site_briefing::report::{Download, Reporter};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

type Sink = Box<dyn Write + Send>;

/// Prints messages and documents, and saves downloads into a directory.
///
/// With no output directory downloads are only announced.
pub struct ConsoleReporter {
    out: Mutex<Sink>,
    err: Mutex<Sink>,
    output_dir: Option<PathBuf>,
    saved: Mutex<Vec<PathBuf>>,
}

impl ConsoleReporter {
    pub fn stdout(output_dir: Option<PathBuf>) -> Self {
        Self::with_writers(
            Box::new(std::io::stdout()),
            Box::new(std::io::stderr()),
            output_dir,
        )
    }

    pub fn with_writers(out: Sink, err: Sink, output_dir: Option<PathBuf>) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
            output_dir,
            saved: Mutex::new(Vec::new()),
        }
    }

    /// Files written by [`Reporter::download`] so far
    pub fn saved_files(&self) -> Vec<PathBuf> {
        self.saved
            .lock()
            .map(|saved| saved.clone())
            .unwrap_or_default()
    }

    fn write_out(&self, text: &str) {
        write_to(&self.out, text);
    }

    fn write_err(&self, text: &str) {
        write_to(&self.err, text);
    }

    fn save(&self, dir: &Path, download: &Download) {
        match download.write_to(dir) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "Saved briefing");
                self.write_out(&format!("💾 Arquivo salvo: {}\n", path.display()));
                if let Ok(mut saved) = self.saved.lock() {
                    saved.push(path);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, dir = %dir.display(), "Could not save briefing");
                self.write_err(&format!("❌ Não foi possível salvar {}: {}\n", download.file_name, e));
            }
        }
    }
}

fn write_to(sink: &Mutex<Sink>, text: &str) {
    if let Ok(mut sink) = sink.lock() {
        if let Err(e) = sink.write_all(text.as_bytes()).and_then(|_| sink.flush()) {
            tracing::warn!(error = %e, "Console write failed");
        }
    }
}

impl Reporter for ConsoleReporter {
    fn error(&self, message: &str) {
        self.write_err(&format!("❌ {message}\n"));
    }

    fn success(&self, message: &str) {
        self.write_out(&format!("✅ {message}\n"));
    }

    fn document(&self, title: &str, markdown: &str) {
        self.write_out(&format!("\n{title}\n\n{}\n", markdown.trim_end()));
    }

    fn download(&self, download: &Download) {
        match &self.output_dir {
            Some(dir) => self.save(dir, download),
            None => self.write_out(&format!(
                "📥 Download disponível: {} ({})\n",
                download.file_name, download.mime_type
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl Buffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn reporter(output_dir: Option<PathBuf>) -> (ConsoleReporter, Buffer, Buffer) {
        let (out, err) = (Buffer::default(), Buffer::default());
        let reporter =
            ConsoleReporter::with_writers(Box::new(out.clone()), Box::new(err.clone()), output_dir);
        (reporter, out, err)
    }

    fn download() -> Download {
        Download {
            file_name: "briefing_site_Acme_2026-10-16.md".to_string(),
            mime_type: "text/markdown",
            content: "# Briefing\n".to_string(),
        }
    }

    #[test]
    fn test_messages_go_to_their_streams() {
        let (reporter, out, err) = reporter(None);
        reporter.error("Erro ao gerar o briefing: quota");
        reporter.success("Briefing gerado com sucesso!");
        reporter.document("📄 Briefing", "# Conteúdo\n\n");

        assert_eq!(err.contents(), "❌ Erro ao gerar o briefing: quota\n");
        assert_eq!(
            out.contents(),
            "✅ Briefing gerado com sucesso!\n\n📄 Briefing\n\n# Conteúdo\n"
        );
    }

    #[test]
    fn test_download_without_dir_is_announced() {
        let (reporter, out, _) = reporter(None);
        reporter.download(&download());
        assert!(out
            .contents()
            .contains("briefing_site_Acme_2026-10-16.md (text/markdown)"));
        assert!(reporter.saved_files().is_empty());
    }

    #[test]
    fn test_download_is_saved_into_dir() {
        let dir = tempfile::tempdir().unwrap();
        let (reporter, out, _) = reporter(Some(dir.path().to_path_buf()));
        reporter.download(&download());

        let saved = reporter.saved_files();
        assert_eq!(saved, vec![dir.path().join("briefing_site_Acme_2026-10-16.md")]);
        assert_eq!(std::fs::read_to_string(&saved[0]).unwrap(), "# Briefing\n");
        assert!(out.contents().starts_with("💾 Arquivo salvo:"));
    }
}
