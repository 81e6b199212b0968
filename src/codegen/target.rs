/// Accumulates the three assembly sections in emission order and mints
/// the monotonic labels the generator needs: `.J` for branches, `.S`/`.E`
/// for while loops, `.L` for rodata constants.
pub(super) struct AsmBuffers {
    globals: Vec<String>,
    data: Vec<String>,
    rodata: Vec<String>,
    text: Vec<String>,
    label_count: u32,
}

impl AsmBuffers {
    pub(super) fn new() -> Self {
        Self {
            globals: Vec::new(),
            data: Vec::new(),
            rodata: Vec::new(),
            text: Vec::new(),
            label_count: 0,
        }
    }

    pub(super) fn comm(&mut self, name: &str, size: u32) {
        let align = size.min(4).max(1);
        self.globals.push(format!("    .comm {name}, {size}, {align}"));
    }

    /// Opens a `.globl`-backed, initialised global in `.data`; follow up
    /// with [`AsmBuffers::data_directive`] calls for its contents.
    pub(super) fn begin_data(&mut self, name: &str) {
        self.data.push(format!("    .globl {name}"));
        self.data.push(format!("{name}:"));
    }

    pub(super) fn data_directive(&mut self, directive: &str, value: i64) {
        self.data.push(format!("    {directive} {value}"));
    }

    /// Mints a fresh numeric suffix for a label prefix, e.g. `.J` -> `.J3`.
    pub(super) fn make_label(&mut self, prefix: &str) -> String {
        let label = format!("{prefix}{}", self.label_count);
        self.label_count += 1;
        label
    }

    /// Interns a string literal's raw (quote-stripped) body as a rodata
    /// constant and returns its label.
    pub(super) fn add_string(&mut self, raw: &str) -> String {
        let label = format!(".L{}", self.label_count);
        self.label_count += 1;
        self.rodata.push(format!("{label}:"));
        self.rodata.push(format!("    .string \"{raw}\""));
        label
    }

    pub(super) fn line(&mut self, text: impl Into<String>) {
        self.text.push(text.into());
    }

    pub(super) fn label_line(&mut self, label: &str) {
        self.text.push(format!("{label}:"));
    }

    pub(super) fn render(self) -> String {
        let mut out = String::new();
        for g in &self.globals {
            out.push_str(g);
            out.push('\n');
        }
        if !self.data.is_empty() {
            out.push_str("    .data\n");
            for d in &self.data {
                out.push_str(d);
                out.push('\n');
            }
        }
        out.push_str("    .section .rodata\n");
        for r in &self.rodata {
            out.push_str(r);
            out.push('\n');
        }
        out.push_str("    .text\n");
        for t in &self.text {
            if t.ends_with(':') {
                out.push_str(t);
            } else {
                out.push_str("    ");
                out.push_str(t);
            }
            out.push('\n');
        }
        out
    }
}
