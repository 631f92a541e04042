use doclist_core::{FilterOptions, Record};
use std::io::{self, Write};

/// Shown for display fields missing from a record
pub const PLACEHOLDER: &str = "Not listed";

/// Output surface for the browsing session
pub trait Presenter {
    fn render_list(&mut self, records: &[Record]) -> io::Result<()>;
    fn render_detail(&mut self, record: &Record, similar: &[Record]) -> io::Result<()>;
    fn render_error(&mut self, message: &str) -> io::Result<()>;
    fn populate_filters(&mut self, options: &FilterOptions) -> io::Result<()>;
    fn hide_detail(&mut self) -> io::Result<()>;
}

/// Plain text rendering to any writer
pub struct TextPresenter<W: Write> {
    out: W,
    show_filters: bool,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out, show_filters: false }
    }

    /// Also print the specialty and area options after each load
    #[must_use]
    pub fn with_filter_options(mut self, show: bool) -> Self {
        self.show_filters = show;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn list_line(record: &Record) -> String {
    format!(
        "[{}] {}, Specialty: {}, Rating: {}",
        record.id, record.name, record.specialty, record.review_score
    )
}

pub fn contact_line(record: &Record) -> String {
    match &record.contact {
        Some(c) => format!("Email: {}, Phone: {}", c.email, c.phone),
        None => format!("Contact: {}", PLACEHOLDER),
    }
}

pub fn education_line(record: &Record) -> String {
    if record.education.is_empty() {
        return format!("Education: {}", PLACEHOLDER);
    }
    let entries: Vec<String> = record.education.iter().map(|e| e.to_string()).collect();
    format!("Education: {}", entries.join("; "))
}

pub fn similar_line(record: &Record) -> String {
    format!(
        "[{}] {} - {}, Rating: {}",
        record.id, record.name, record.area, record.review_score
    )
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn render_list(&mut self, records: &[Record]) -> io::Result<()> {
        for record in records {
            writeln!(self.out, "{}", list_line(record))?;
        }
        self.out.flush()
    }

    fn render_detail(&mut self, record: &Record, similar: &[Record]) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", record.name)?;
        writeln!(self.out, "Specialty: {}", record.specialty)?;
        writeln!(self.out, "Area: {}", record.area)?;
        writeln!(self.out, "Rating: {}", record.review_score)?;
        writeln!(self.out, "Years of Experience: {}", record.years_of_experience)?;
        writeln!(self.out, "{}", contact_line(record))?;
        writeln!(self.out, "{}", education_line(record))?;
        writeln!(self.out, "Similar doctors:")?;
        if similar.is_empty() {
            writeln!(self.out, "  (none)")?;
        }
        for other in similar {
            writeln!(self.out, "  {}", similar_line(other))?;
        }
        self.out.flush()
    }

    fn render_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)?;
        self.out.flush()
    }

    fn populate_filters(&mut self, options: &FilterOptions) -> io::Result<()> {
        if !self.show_filters {
            return Ok(());
        }
        writeln!(self.out, "Specialties: {}", options.specialties.join(", "))?;
        writeln!(self.out, "Areas: {}", options.areas.join(", "))?;
        self.out.flush()
    }

    // nothing stays on screen in text output
    fn hide_detail(&mut self) -> io::Result<()> {
        Ok(())
    }
}
