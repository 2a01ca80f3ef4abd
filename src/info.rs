use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, FixedOffset, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// General document metadata written to each calendar page's info dictionary
#[derive(Default, Debug, Clone)]
pub struct Info {
    /// The title of the document.
    pub title: Option<String>,
    /// The subject of the document.
    pub subject: Option<String>,
    /// When the document was created. Left out unless set, so that identical calendars
    /// produce identical files.
    pub created: Option<DateTime<FixedOffset>>,
}

impl Info {
    /// Create a new info block, with all metadata set to [None]
    pub fn new() -> Info {
        Info::default()
    }

    /// Set the title of the info block, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the subject of the info block, modifying `self`
    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Set the creation date of the info block, modifying `self`
    pub fn created(&mut self, created: DateTime<FixedOffset>) -> &mut Self {
        self.created = Some(created);
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));

        if let Some(created) = &self.created {
            let offset = created.offset().local_minus_utc();
            let offset_hours = offset / (60 * 60);
            let offset_minutes = ((offset - (offset_hours * 60 * 60)) / 60).abs();
            let date = PDate::new(created.year() as u16)
                .month(created.month() as u8)
                .day(created.day() as u8)
                .hour(created.hour() as u8)
                .minute(created.minute() as u8)
                .second(created.second() as u8)
                .utc_offset_hour(offset_hours as i8)
                .utc_offset_minute(offset_minutes as u8);
            info.creation_date(date);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(info: &Info) -> String {
        let mut refs = ObjectReferences::new();
        let mut writer = Pdf::new();
        info.write(&mut refs, &mut writer);
        String::from_utf8_lossy(&writer.finish()).into_owned()
    }

    #[test]
    fn creation_date_only_when_set() {
        let mut info = Info::new();
        info.title("March 2024").subject("Calendar");
        let text = written(&info);
        assert!(text.contains("/Title (March 2024)"));
        assert!(!text.contains("/CreationDate"));

        let created = DateTime::parse_from_rfc3339("2024-03-01T09:30:00-06:00").unwrap();
        info.created(created);
        let text = written(&info);
        assert!(text.contains("/CreationDate (D:20240301093000-06'00"));
    }
}
