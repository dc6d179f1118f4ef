//! S3 enums and value objects.
//!
//! Value objects carried in request bodies implement [`XmlSerialize`];
//! those found in responses implement [`XmlDeserialize`]. Members keep
//! the S3 element names: lists are flattened unless noted (`TagSet`).

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use quick_xml::{Reader, Writer};
use ruststack_sdk_core::input::{check_enum, required, required_list, validate_list};
use ruststack_sdk_core::{InputError, Validate, aws_enum};
use ruststack_sdk_xml::deserialize::{
    deserialize_list, for_each_child, read_bool, read_i64, read_text_content,
    read_timestamp, skip_element,
};
use ruststack_sdk_xml::serialize::{
    write_flattened, write_optional_bool, write_optional_i32, write_optional_text,
    write_text_list, write_wrapped_list,
};
use ruststack_sdk_xml::{XmlDeserialize, XmlError, XmlSerialize};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

aws_enum! {
    /// Canned ACL applied to a new bucket.
    pub enum BucketCannedACL {
        Private = "private",
        PublicRead = "public-read",
        PublicReadWrite = "public-read-write",
        AuthenticatedRead = "authenticated-read",
    }
}

aws_enum! {
    /// Canned ACL applied to an object.
    pub enum ObjectCannedACL {
        Private = "private",
        PublicRead = "public-read",
        PublicReadWrite = "public-read-write",
        AuthenticatedRead = "authenticated-read",
        AwsExecRead = "aws-exec-read",
        BucketOwnerRead = "bucket-owner-read",
        BucketOwnerFullControl = "bucket-owner-full-control",
    }
}

aws_enum! {
    /// Object ownership setting of a new bucket.
    pub enum ObjectOwnership {
        BucketOwnerPreferred = "BucketOwnerPreferred",
        ObjectWriter = "ObjectWriter",
        BucketOwnerEnforced = "BucketOwnerEnforced",
    }
}

aws_enum! {
    /// Storage class of an object.
    pub enum StorageClass {
        Standard = "STANDARD",
        ReducedRedundancy = "REDUCED_REDUNDANCY",
        StandardIa = "STANDARD_IA",
        OnezoneIa = "ONEZONE_IA",
        IntelligentTiering = "INTELLIGENT_TIERING",
        Glacier = "GLACIER",
        DeepArchive = "DEEP_ARCHIVE",
        Outposts = "OUTPOSTS",
        GlacierIr = "GLACIER_IR",
        Snow = "SNOW",
        ExpressOnezone = "EXPRESS_ONEZONE",
    }
}

aws_enum! {
    /// Server-side encryption algorithm.
    pub enum ServerSideEncryption {
        Aes256 = "AES256",
        AwsKms = "aws:kms",
        AwsKmsDsse = "aws:kms:dsse",
    }
}

aws_enum! {
    /// Whether `CopyObject` keeps or replaces the source metadata.
    pub enum MetadataDirective {
        Copy = "COPY",
        Replace = "REPLACE",
    }
}

aws_enum! {
    /// Whether `CopyObject` keeps or replaces the source tags.
    pub enum TaggingDirective {
        Copy = "COPY",
        Replace = "REPLACE",
    }
}

aws_enum! {
    /// Encoding applied to keys in list responses.
    pub enum EncodingType {
        Url = "url",
    }
}

aws_enum! {
    /// Confirms that the requester pays for the request.
    pub enum RequestPayer {
        Requester = "requester",
    }
}

aws_enum! {
    /// Reported when the requester was charged.
    pub enum RequestCharged {
        Requester = "requester",
    }
}

// ---------------------------------------------------------------------------
// Request value objects
// ---------------------------------------------------------------------------

/// A key/value tag.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Required.
    #[serde(default)]
    pub key: Option<String>,

    /// Required.
    #[serde(default)]
    pub value: Option<String>,
}

impl Validate for Tag {
    fn validate(&self) -> Result<(), InputError> {
        required("Tag", "Key", &self.key)?;
        required("Tag", "Value", &self.value)?;
        Ok(())
    }
}

impl XmlSerialize for Tag {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Key", self.key.as_deref())?;
        write_optional_text(writer, "Value", self.value.as_deref())?;
        Ok(())
    }
}

impl XmlDeserialize for Tag {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut tag = Self::default();
        for_each_child(reader, "Tag", |reader, name| {
            match name {
                "Key" => tag.key = Some(read_text_content(reader)?),
                "Value" => tag.value = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(tag)
    }
}

/// A set of tags, serialized as `<TagSet><Tag>..</Tag></TagSet>`.
///
/// An empty set is valid and removes all tags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tagging {
    #[serde(default)]
    pub tag_set: Vec<Tag>,
}

impl Validate for Tagging {
    fn validate(&self) -> Result<(), InputError> {
        validate_list(&self.tag_set)
    }
}

impl XmlSerialize for Tagging {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_wrapped_list(writer, "TagSet", "Tag", &self.tag_set)
    }
}

/// One object named in a `DeleteObjects` request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ObjectIdentifier {
    /// Required.
    #[serde(default)]
    pub key: Option<String>,

    #[serde(default)]
    pub version_id: Option<String>,

    /// Delete only if the ETag still matches.
    #[serde(rename = "ETag", default)]
    pub e_tag: Option<String>,
}

impl Validate for ObjectIdentifier {
    fn validate(&self) -> Result<(), InputError> {
        required("ObjectIdentifier", "Key", &self.key)?;
        Ok(())
    }
}

impl XmlSerialize for ObjectIdentifier {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "Key", self.key.as_deref())?;
        write_optional_text(writer, "VersionId", self.version_id.as_deref())?;
        write_optional_text(writer, "ETag", self.e_tag.as_deref())?;
        Ok(())
    }
}

/// Body of a `DeleteObjects` request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Delete {
    /// Required. Flattened as `<Object>`.
    #[serde(default)]
    pub objects: Vec<ObjectIdentifier>,

    /// Report only the keys that failed.
    #[serde(default)]
    pub quiet: Option<bool>,
}

impl Validate for Delete {
    fn validate(&self) -> Result<(), InputError> {
        required_list("Delete", "Objects", &self.objects)?;
        validate_list(&self.objects)
    }
}

impl XmlSerialize for Delete {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_bool(writer, "Quiet", self.quiet)?;
        write_flattened(writer, "Object", &self.objects)?;
        Ok(())
    }
}

/// One cross-origin access rule.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CORSRule {
    #[serde(rename = "ID", default)]
    pub id: Option<String>,

    #[serde(default)]
    pub allowed_headers: Vec<String>,

    /// Required. `GET`, `PUT`, `POST`, `DELETE` or `HEAD`.
    #[serde(default)]
    pub allowed_methods: Vec<String>,

    /// Required.
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    #[serde(default)]
    pub expose_headers: Vec<String>,

    #[serde(default)]
    pub max_age_seconds: Option<i32>,
}

impl Validate for CORSRule {
    fn validate(&self) -> Result<(), InputError> {
        required_list("CORSRule", "AllowedMethods", &self.allowed_methods)?;
        required_list("CORSRule", "AllowedOrigins", &self.allowed_origins)?;
        Ok(())
    }
}

impl XmlSerialize for CORSRule {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "ID", self.id.as_deref())?;
        write_text_list(writer, "AllowedHeader", &self.allowed_headers)?;
        write_text_list(writer, "AllowedMethod", &self.allowed_methods)?;
        write_text_list(writer, "AllowedOrigin", &self.allowed_origins)?;
        write_text_list(writer, "ExposeHeader", &self.expose_headers)?;
        write_optional_i32(writer, "MaxAgeSeconds", self.max_age_seconds)?;
        Ok(())
    }
}

/// Body of a `PutBucketCors` request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CORSConfiguration {
    /// Required. Flattened as `<CORSRule>`.
    #[serde(rename = "CORSRules", default)]
    pub cors_rules: Vec<CORSRule>,
}

impl Validate for CORSConfiguration {
    fn validate(&self) -> Result<(), InputError> {
        required_list("CORSConfiguration", "CORSRules", &self.cors_rules)?;
        validate_list(&self.cors_rules)
    }
}

impl XmlSerialize for CORSConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_flattened(writer, "CORSRule", &self.cors_rules)
    }
}

/// Body of a `CreateBucket` request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CreateBucketConfiguration {
    /// Region of the bucket. Omitted for `us-east-1`.
    ///
    /// Kept as a string: new regions appear faster than model updates.
    #[serde(default)]
    pub location_constraint: Option<String>,
}

impl XmlSerialize for CreateBucketConfiguration {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_text(writer, "LocationConstraint", self.location_constraint.as_deref())
    }
}

/// One uploaded part, as listed in `CompleteMultipartUpload`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CompletedPart {
    /// ETag returned by `UploadPart`.
    #[serde(rename = "ETag", default)]
    pub e_tag: Option<String>,

    #[serde(default)]
    pub part_number: Option<i32>,

    #[serde(rename = "ChecksumCRC32", default)]
    pub checksum_crc32: Option<String>,

    #[serde(rename = "ChecksumCRC32C", default)]
    pub checksum_crc32c: Option<String>,

    #[serde(rename = "ChecksumSHA1", default)]
    pub checksum_sha1: Option<String>,

    #[serde(rename = "ChecksumSHA256", default)]
    pub checksum_sha256: Option<String>,
}

impl XmlSerialize for CompletedPart {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_optional_i32(writer, "PartNumber", self.part_number)?;
        write_optional_text(writer, "ETag", self.e_tag.as_deref())?;
        write_optional_text(writer, "ChecksumCRC32", self.checksum_crc32.as_deref())?;
        write_optional_text(writer, "ChecksumCRC32C", self.checksum_crc32c.as_deref())?;
        write_optional_text(writer, "ChecksumSHA1", self.checksum_sha1.as_deref())?;
        write_optional_text(writer, "ChecksumSHA256", self.checksum_sha256.as_deref())?;
        Ok(())
    }
}

/// Body of a `CompleteMultipartUpload` request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct CompletedMultipartUpload {
    /// In ascending part number order. Flattened as `<Part>`.
    #[serde(default)]
    pub parts: Vec<CompletedPart>,
}

impl XmlSerialize for CompletedMultipartUpload {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_flattened(writer, "Part", &self.parts)
    }
}

// ---------------------------------------------------------------------------
// Response value objects
// ---------------------------------------------------------------------------

/// Owner of a bucket or object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Owner {
    pub display_name: Option<String>,
    pub id: Option<String>,
}

impl XmlDeserialize for Owner {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut owner = Self::default();
        for_each_child(reader, "Owner", |reader, name| {
            match name {
                "DisplayName" => owner.display_name = Some(read_text_content(reader)?),
                "ID" => owner.id = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(owner)
    }
}

/// An entry of `ListObjectsV2` `Contents`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    pub key: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    /// Quoted, e.g. `"9b2cf535f27731c974343645a3985328"`.
    pub e_tag: Option<String>,
    pub size: Option<i64>,
    pub storage_class: Option<StorageClass>,
    /// Present only when `FetchOwner` was set.
    pub owner: Option<Owner>,
}

impl XmlDeserialize for Object {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut object = Self::default();
        for_each_child(reader, "Object", |reader, name| {
            match name {
                "Key" => object.key = Some(read_text_content(reader)?),
                "LastModified" => object.last_modified = Some(read_timestamp(reader)?),
                "ETag" => object.e_tag = Some(read_text_content(reader)?),
                "Size" => object.size = Some(read_i64(reader)?),
                "StorageClass" => {
                    object.storage_class = Some(StorageClass::from(read_text_content(reader)?));
                }
                "Owner" => object.owner = Some(Owner::deserialize_xml(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(object)
    }
}

/// A key prefix rolled up by the `Delimiter` of a list request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonPrefix {
    pub prefix: Option<String>,
}

impl XmlDeserialize for CommonPrefix {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut common = Self::default();
        for_each_child(reader, "CommonPrefixes", |reader, name| {
            match name {
                "Prefix" => common.prefix = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(common)
    }
}

/// A key removed by `DeleteObjects`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeletedObject {
    pub key: Option<String>,
    pub version_id: Option<String>,
    pub delete_marker: Option<bool>,
    pub delete_marker_version_id: Option<String>,
}

impl XmlDeserialize for DeletedObject {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut deleted = Self::default();
        for_each_child(reader, "Deleted", |reader, name| {
            match name {
                "Key" => deleted.key = Some(read_text_content(reader)?),
                "VersionId" => deleted.version_id = Some(read_text_content(reader)?),
                "DeleteMarker" => deleted.delete_marker = Some(read_bool(reader)?),
                "DeleteMarkerVersionId" => {
                    deleted.delete_marker_version_id = Some(read_text_content(reader)?);
                }
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(deleted)
    }
}

/// A key `DeleteObjects` could not remove.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Error {
    pub key: Option<String>,
    pub version_id: Option<String>,
    /// e.g. `AccessDenied`.
    pub code: Option<String>,
    pub message: Option<String>,
}

impl XmlDeserialize for Error {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut error = Self::default();
        for_each_child(reader, "Error", |reader, name| {
            match name {
                "Key" => error.key = Some(read_text_content(reader)?),
                "VersionId" => error.version_id = Some(read_text_content(reader)?),
                "Code" => error.code = Some(read_text_content(reader)?),
                "Message" => error.message = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(error)
    }
}

/// Body of a `CopyObject` response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyObjectResult {
    pub e_tag: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
    pub checksum_crc32: Option<String>,
    pub checksum_sha256: Option<String>,
}

impl XmlDeserialize for CopyObjectResult {
    fn deserialize_xml(reader: &mut Reader<&[u8]>) -> Result<Self, XmlError> {
        let mut result = Self::default();
        for_each_child(reader, "CopyObjectResult", |reader, name| {
            match name {
                "ETag" => result.e_tag = Some(read_text_content(reader)?),
                "LastModified" => result.last_modified = Some(read_timestamp(reader)?),
                "ChecksumCRC32" => result.checksum_crc32 = Some(read_text_content(reader)?),
                "ChecksumSHA256" => result.checksum_sha256 = Some(read_text_content(reader)?),
                _ => skip_element(reader)?,
            }
            Ok(())
        })?;
        Ok(result)
    }
}

/// Read a `<TagSet>` wrapper, as found in `GetObjectTagging` responses.
pub(crate) fn read_tag_set(reader: &mut Reader<&[u8]>) -> Result<Vec<Tag>, XmlError> {
    deserialize_list(reader, "Tag")
}

/// Validate an optional canned ACL, storage class or SSE member.
pub(crate) fn check_headers(
    shape: &'static str,
    acl: Option<&ObjectCannedACL>,
    storage_class: Option<&StorageClass>,
    sse: Option<&ServerSideEncryption>,
) -> Result<(), InputError> {
    check_enum(shape, "ACL", acl)?;
    check_enum(shape, "StorageClass", storage_class)?;
    check_enum(shape, "ServerSideEncryption", sse)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use ruststack_sdk_xml::{from_xml, to_xml};

    use super::*;
    use crate::NAMESPACE;

    fn xml_string<T: XmlSerialize>(root: &str, value: &T) -> String {
        String::from_utf8(to_xml(root, Some(NAMESPACE), value).unwrap()).unwrap()
    }

    #[test]
    fn test_should_serialize_delete_with_flattened_objects() {
        let delete = Delete {
            objects: vec![
                ObjectIdentifier {
                    key: Some("a.txt".to_owned()),
                    ..Default::default()
                },
                ObjectIdentifier {
                    key: Some("b.txt".to_owned()),
                    version_id: Some("v2".to_owned()),
                    e_tag: None,
                },
            ],
            quiet: Some(true),
        };
        let xml = xml_string("Delete", &delete);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(
            "<Delete xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\"><Quiet>true</Quiet>\
             <Object><Key>a.txt</Key></Object>\
             <Object><Key>b.txt</Key><VersionId>v2</VersionId></Object></Delete>"
        ));
    }

    #[test]
    fn test_should_reject_delete_without_objects() {
        let err = Delete::default().validate().unwrap_err();
        assert!(matches!(
            err,
            InputError::MissingRequiredField {
                shape: "Delete",
                field: "Objects"
            }
        ));

        let missing_key = Delete {
            objects: vec![ObjectIdentifier::default()],
            quiet: None,
        };
        assert!(missing_key.validate().is_err());
    }

    #[test]
    fn test_should_serialize_cors_rules() {
        let config: CORSConfiguration = serde_json::from_value(serde_json::json!({
            "CORSRules": [{
                "ID": "web",
                "AllowedMethods": ["GET", "PUT"],
                "AllowedOrigins": ["https://example.com"],
                "MaxAgeSeconds": 3000
            }]
        }))
        .unwrap();
        config.validate().unwrap();

        let xml = xml_string("CORSConfiguration", &config);
        assert!(xml.contains(
            "<CORSRule><ID>web</ID><AllowedMethod>GET</AllowedMethod><AllowedMethod>PUT</AllowedMethod>\
             <AllowedOrigin>https://example.com</AllowedOrigin><MaxAgeSeconds>3000</MaxAgeSeconds></CORSRule>"
        ));
        assert!(!xml.contains("AllowedHeader"));
    }

    #[test]
    fn test_should_require_cors_methods_and_origins() {
        let rule = CORSRule {
            allowed_origins: vec!["*".to_owned()],
            ..Default::default()
        };
        assert!(matches!(
            rule.validate(),
            Err(InputError::MissingRequiredField {
                field: "AllowedMethods",
                ..
            })
        ));
        assert!(CORSConfiguration::default().validate().is_err());
    }

    #[test]
    fn test_should_serialize_wrapped_tag_set() {
        let tagging = Tagging {
            tag_set: vec![Tag {
                key: Some("env".to_owned()),
                value: Some("prod".to_owned()),
            }],
        };
        let xml = xml_string("Tagging", &tagging);
        assert!(xml.contains("<TagSet><Tag><Key>env</Key><Value>prod</Value></Tag></TagSet>"));

        let empty = xml_string("Tagging", &Tagging::default());
        assert!(empty.contains("<TagSet></TagSet>"));
    }

    #[test]
    fn test_should_serialize_completed_parts_in_order() {
        let upload = CompletedMultipartUpload {
            parts: vec![
                CompletedPart {
                    e_tag: Some("e1".to_owned()),
                    part_number: Some(1),
                    ..Default::default()
                },
                CompletedPart {
                    e_tag: Some("e2".to_owned()),
                    part_number: Some(2),
                    ..Default::default()
                },
            ],
        };
        let xml = xml_string("CompleteMultipartUpload", &upload);
        assert!(xml.contains(
            "<Part><PartNumber>1</PartNumber><ETag>e1</ETag></Part>\
             <Part><PartNumber>2</PartNumber><ETag>e2</ETag></Part>"
        ));
    }

    #[test]
    fn test_should_deserialize_object_with_owner() {
        let xml = br#"<Contents>
            <Key>photos/2024/cat.jpg</Key>
            <LastModified>2024-03-01T10:00:00.000Z</LastModified>
            <ETag>&quot;abc&quot;</ETag>
            <Size>1024</Size>
            <StorageClass>STANDARD</StorageClass>
            <Owner><ID>owner-id</ID><DisplayName>me</DisplayName></Owner>
        </Contents>"#;
        let object: Object = from_xml(xml).unwrap();
        assert_eq!(object.key.as_deref(), Some("photos/2024/cat.jpg"));
        assert_eq!(object.e_tag.as_deref(), Some("\"abc\""));
        assert_eq!(object.size, Some(1024));
        assert_eq!(object.storage_class, Some(StorageClass::Standard));
        assert_eq!(object.owner.unwrap().id.as_deref(), Some("owner-id"));
        assert_eq!(object.last_modified.unwrap().timestamp(), 1_709_287_200);
    }

    #[test]
    fn test_should_keep_unknown_storage_class() {
        let object: Object =
            from_xml(b"<Contents><StorageClass>FROZEN</StorageClass></Contents>").unwrap();
        assert_eq!(
            object.storage_class,
            Some(StorageClass::Unknown("FROZEN".to_owned()))
        );
    }

    #[test]
    fn test_should_reject_unknown_canned_acl() {
        let acl = ObjectCannedACL::from("everyone");
        assert!(matches!(
            check_headers("PutObjectInput", Some(&acl), None, None),
            Err(InputError::InvalidEnumValue { field: "ACL", .. })
        ));
        assert!(
            check_headers(
                "PutObjectInput",
                Some(&ObjectCannedACL::BucketOwnerFullControl),
                Some(&StorageClass::GlacierIr),
                Some(&ServerSideEncryption::AwsKms),
            )
            .is_ok()
        );
    }
}
