use crate::domain::OutputRepository;

/// Buffers outcome lines and writes them to stdout on flush.
#[derive(Default, Debug)]
pub struct StdOutOutput {
    lines: Vec<String>,
}

impl StdOutOutput {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }
}

impl OutputRepository for StdOutOutput {
    fn record(&mut self, line: String) {
        self.lines.push(line);
    }

    fn flush(&mut self) {
        for line in self.lines.drain(..) {
            println!("{}", line);
        }
    }
}
