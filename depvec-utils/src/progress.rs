use std::fs::File;
use std::io::{self, Read};

use indicatif::ProgressBar;

/// File reader that shows its progress on stderr.
pub struct FileProgress {
    inner: File,
    progress: ProgressBar,
}

impl FileProgress {
    pub fn new(file: File) -> io::Result<Self> {
        let size = file.metadata()?.len();

        Ok(FileProgress {
            inner: file,
            progress: ProgressBar::new(size),
        })
    }
}

impl Read for FileProgress {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n_read = self.inner.read(buf)?;
        self.progress.inc(n_read as u64);
        Ok(n_read)
    }
}

impl Drop for FileProgress {
    fn drop(&mut self) {
        self.progress.finish_and_clear();
    }
}
