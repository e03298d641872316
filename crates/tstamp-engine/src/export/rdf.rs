use tstamp_types::{FileRecord, LineEnding};

use crate::xml::Element;

pub const RDF_NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

const RESOURCE_BASE: &str = "https://rdf.rdm.nii.ac.jp/";
const DATASET_TYPE: &str = "http://www.w3.org/ns/dcat#Dataset";
const FILE_TYPE: &str = "http://semanticscience.org/resource/SIO_000396";

/// Prefixes declared on the `rdf:RDF` root, in declaration order.
pub const NAMESPACES: [(&str, &str); 15] = [
    ("schema", "http://schema.org/"),
    ("rdmr", "https://rdf.rdm.nii.ac.jp/resource/"),
    ("owl", "http://www.w3.org/2002/07/owl#"),
    ("org", "http://www.w3.org/ns/org#"),
    ("frapo", "http://purl.org/cerif/frapo/"),
    ("xsd", "http://www.w3.org/2001/XMLSchema#"),
    ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
    ("vcard", "http://www.w3.org/2006/vcard/ns#"),
    ("rdf", RDF_NAMESPACE),
    ("sio", "http://semanticscience.org/resource/"),
    ("dcterms", "http://purl.org/dc/terms/"),
    ("sem", "http://semanticweb.cs.vu.nl/2009/11/sem/"),
    ("dcat", "http://www.w3.org/ns/dcat#"),
    ("foaf", "http://xmlns.com/foaf/0.1/"),
    ("sioc", "http://rdfs.org/sioc/ns#"),
];

/// Make a verify date usable as a URI path segment.
///
/// Spaces become `_`, while `/` and `:` become `-`, so
/// `2024-01-02 03:04:05` turns into `2024-01-02_03-04-05`. Colons are
/// mapped to hyphens rather than dropped, and every space is replaced, so
/// identifiers keep that documented shape.
pub fn sanitize_verify_date(date: &str) -> String {
    date.replace(' ', "_").replace(['/', ':'], "-")
}

/// Identifier of the timestamp event recorded for `record`.
///
/// Absent components are left empty.
pub fn timestamp_id(record: &FileRecord) -> String {
    format!(
        "{}resource/ts/{}/{}/{}/{}",
        RESOURCE_BASE,
        record.text("project_id"),
        record.text("file_id"),
        record.text("verify_user_id"),
        sanitize_verify_date(record.text("verify_date")),
    )
}

/// `rdf:about` of the file description.
pub fn file_resource_id(record: &FileRecord) -> String {
    format!("{}resource/file/{}", RESOURCE_BASE, record.text("file_id"))
}

fn file_id_uri(record: &FileRecord) -> String {
    format!("{}{}", RESOURCE_BASE, record.text("file_id"))
}

fn timestamp_element(record: &FileRecord) -> Element {
    let ts_id = timestamp_id(record);

    let dataset = Element::new("rdf:Description")
        .attr("rdf:about", ts_id.as_str())
        .child(Element::new("rdf:type").attr("rdf:resource", DATASET_TYPE));

    let file = Element::new("rdf:Description")
        .attr("rdf:about", file_resource_id(record))
        .child(Element::new("rdf:type").attr("rdf:resource", FILE_TYPE))
        .child(Element::new("rdf:seeAlso").attr("rdf:resource", file_id_uri(record)));

    Element::new("rdmr:Timestamp")
        .attr("rdf:about", ts_id)
        .child(dataset)
        .child(file)
}

/// Build the `rdf:RDF` tree for `records`.
pub fn rdf_document(records: &[&FileRecord]) -> Element {
    let mut root = Element::new("rdf:RDF");
    for (prefix, uri) in NAMESPACES {
        root.set_attr(format!("xmlns:{}", prefix), uri);
    }
    for record in records {
        root.push(timestamp_element(record));
    }
    root
}

/// Pretty-printed RDF/XML document for `records`.
pub fn generate_rdf(records: &[&FileRecord], line_ending: LineEnding) -> String {
    line_ending.apply(&rdf_document(records).to_pretty_string())
}
