//! Readers for the two CMS-owned XML documents.
//!
//! Both formats belong to the CMS and are consumed read-only:
//!
//! ```text
//! installedPackages.config:  <packages>
//!                              <package repositoryGuid=".." packageGuid=".."/>
//!                            </packages>
//!
//! package.xml:               <umbPackage>
//!                              <files>
//!                                <file><guid>..</guid><orgName>..</orgName><orgPath>..</orgPath></file>
//!                              </files>
//!                            </umbPackage>
//! ```

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{io_err, xml_err, ManifestError};
use crate::types::{FileRecord, PackageRecord};

/// Read the installed-packages registry.
///
/// Produces one [`PackageRecord`] per `<package>` element in document order.
/// Elements where either guid attribute is missing or empty are discarded;
/// a missing file or ill-formed XML is an error.
pub fn read_installed_packages(path: &Path) -> Result<Vec<PackageRecord>, ManifestError> {
    let xml = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e))
                if e.local_name().as_ref() == b"package" =>
            {
                if let Some(record) = package_record(path, &e)? {
                    records.push(record);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(xml_err(path, err)),
        }
        buf.clear();
    }
    Ok(records)
}

fn package_record(
    path: &Path,
    element: &BytesStart<'_>,
) -> Result<Option<PackageRecord>, ManifestError> {
    let mut repository_guid = String::new();
    let mut package_guid = String::new();
    for attr in element.attributes() {
        let attr = attr.map_err(|e| xml_err(path, e.into()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| xml_err(path, e.into()))?
            .into_owned();
        match attr.key.local_name().as_ref() {
            b"repositoryGuid" => repository_guid = value,
            b"packageGuid" => package_guid = value,
            _ => {}
        }
    }
    if repository_guid.is_empty() || package_guid.is_empty() {
        return Ok(None);
    }
    Ok(Some(PackageRecord {
        repository_guid: repository_guid.into(),
        package_guid: package_guid.into(),
    }))
}

/// Read a package's file manifest.
///
/// Produces one [`FileRecord`] per `<file>` element under `<files>`, in
/// document order, field text copied verbatim. A `<file>` missing any of
/// `guid`, `orgName`, `orgPath` is an error naming the missing element.
pub fn read_package_files(path: &Path) -> Result<Vec<FileRecord>, ManifestError> {
    let xml = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let mut reader = Reader::from_reader(xml.as_bytes());
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut buf = Vec::new();

    let mut in_files = false;
    let mut in_file = false;
    let mut current_field: Option<&'static str> = None;
    let mut guid: Option<String> = None;
    let mut org_name: Option<String> = None;
    let mut org_path: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"files" => in_files = true,
                b"file" if in_files => {
                    in_file = true;
                    guid = None;
                    org_name = None;
                    org_path = None;
                }
                b"guid" if in_file => {
                    current_field = Some("guid");
                    guid = Some(String::new());
                }
                b"orgName" if in_file => {
                    current_field = Some("orgName");
                    org_name = Some(String::new());
                }
                b"orgPath" if in_file => {
                    current_field = Some("orgPath");
                    org_path = Some(String::new());
                }
                _ => {}
            },
            // A self-closing <file/> can't carry the required children.
            Ok(Event::Empty(e)) if in_files && e.local_name().as_ref() == b"file" => {
                return Err(ManifestError::MissingElement {
                    path: path.to_path_buf(),
                    element: "guid",
                });
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|err| xml_err(path, err.into()))?;
                push_field_text(current_field, &text, &mut guid, &mut org_name, &mut org_path);
            }
            // CDATA content is already literal text.
            Ok(Event::CData(e)) => {
                let text = String::from_utf8_lossy(&e);
                push_field_text(current_field, &text, &mut guid, &mut org_name, &mut org_path);
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"files" => in_files = false,
                b"file" if in_file => {
                    in_file = false;
                    records.push(FileRecord {
                        file_guid: take_field(path, &mut guid, "guid")?,
                        original_name: take_field(path, &mut org_name, "orgName")?,
                        original_path: take_field(path, &mut org_path, "orgPath")?,
                    });
                }
                b"guid" | b"orgName" | b"orgPath" => current_field = None,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(xml_err(path, err)),
        }
        buf.clear();
    }
    Ok(records)
}

fn push_field_text(
    current_field: Option<&'static str>,
    text: &str,
    guid: &mut Option<String>,
    org_name: &mut Option<String>,
    org_path: &mut Option<String>,
) {
    let field = match current_field {
        Some("guid") => guid,
        Some("orgName") => org_name,
        Some("orgPath") => org_path,
        _ => return,
    };
    if let Some(value) = field.as_mut() {
        value.push_str(text);
    }
}

fn take_field(
    path: &Path,
    field: &mut Option<String>,
    element: &'static str,
) -> Result<String, ManifestError> {
    field.take().ok_or(ManifestError::MissingElement {
        path: path.to_path_buf(),
        element,
    })
}
