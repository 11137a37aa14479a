//! XML output for matrix collections
//!
//! The document mirrors the JSON layout with attributes only:
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <matrices>
//!   <matrix name="beta(3,4)" rows="2" columns="2">
//!     <entry row="1" column="1" value="0.5"/>
//!   </matrix>
//! </matrices>
//! ```

use std::io::Write;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use tempfile::NamedTempFile;

use crate::collect::MatrixCollection;
use crate::error::Result;

/// Write a matrix collection to `<dest>.xml`
///
/// Pretty-printed with two-space indentation and a UTF-8 declaration.
/// Written to a temporary file next to the destination and renamed into
/// place on success.
pub fn write_xml<P: AsRef<Path>>(dest: P, matrices: &MatrixCollection) -> Result<()> {
    let dest = dest.as_ref().with_extension("xml");
    let dir = dest.parent().filter(|p| !p.as_os_str().is_empty());
    let mut tmp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))?;

    {
        let mut writer = Writer::new_with_indent(tmp.as_file_mut(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        writer.write_event(Event::Start(BytesStart::new("matrices")))?;
        for (name, matrix) in matrices {
            let mut elem = BytesStart::new("matrix");
            elem.push_attribute(("name", name.as_str()));
            elem.push_attribute(("rows", matrix.rows.to_string().as_str()));
            elem.push_attribute(("columns", matrix.columns.to_string().as_str()));
            writer.write_event(Event::Start(elem))?;
            for entry in &matrix.entries {
                let mut child = BytesStart::new("entry");
                child.push_attribute(("row", entry.row.to_string().as_str()));
                child.push_attribute(("column", entry.column.to_string().as_str()));
                child.push_attribute(("value", entry.value.as_str()));
                writer.write_event(Event::Empty(child))?;
            }
            writer.write_event(Event::End(BytesEnd::new("matrix")))?;
        }
        writer.write_event(Event::End(BytesEnd::new("matrices")))?;
    }

    tmp.as_file_mut().write_all(b"\n")?;
    tmp.persist(&dest)?;
    Ok(())
}
