//! The IPTC Application Record (record 2) tag dictionary.
//!
//! Every tagged data set in an IPTC-NAA stream carries a one-byte dataset
//! number. This module maps those numbers to their names, as given by the
//! IPTC IIM specification.
//!
//! The map is immutable and process-wide. Parsers take it by reference, so
//! callers with unusual needs can hand in their own table instead.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// The shape of the dictionary: dataset number to dataset name.
pub type ApplicationRecordMap = FxHashMap<u8, &'static str>;

/// A map, (key, value), where:
///
/// - `key` is the one-byte Application Record dataset number
/// - `value` is the dataset's name from the IIM specification
pub static APPLICATION_RECORD_MAP: LazyLock<ApplicationRecordMap> = LazyLock::new(|| {
    let mut m: ApplicationRecordMap = ApplicationRecordMap::default();
    map(&mut m);
    m
});

/// Adds all (key, value) pairs to the currently empty map.
fn map(m: &mut ApplicationRecordMap) {
    // helper lambda to make things slightly shorter :D
    let mut i = |key: u8, value: &'static str| m.insert(key, value);

    //
    // record structure + object identification
    //
    i(0, "ApplicationRecordVersion");
    i(3, "ObjectTypeReference");
    i(4, "ObjectAttributeReference");
    i(5, "ObjectName");
    i(7, "EditStatus");
    i(8, "EditorialUpdate");
    i(10, "Urgency");
    i(12, "SubjectReference");
    i(15, "Category");
    i(20, "SupplementalCategories");
    i(22, "FixtureIdentifier");
    i(25, "Keywords");
    i(26, "ContentLocationCode");
    i(27, "ContentLocationName");

    //
    // release + reference scheduling
    //
    i(30, "ReleaseDate");
    i(35, "ReleaseTime");
    i(37, "ExpirationDate");
    i(38, "ExpirationTime");
    i(40, "SpecialInstructions");
    i(42, "ActionAdvised");
    i(45, "ReferenceService");
    i(47, "ReferenceDate");
    i(50, "ReferenceNumber");

    //
    // creation info
    //
    i(55, "DateCreated");
    i(60, "TimeCreated");
    i(62, "DigitalCreationDate");
    i(63, "DigitalCreationTime");
    i(65, "OriginatingProgram");
    i(70, "ProgramVersion");
    i(75, "ObjectCycle");

    //
    // creator + location
    //
    i(80, "Byline");
    i(85, "BylineTitle");
    i(90, "City");
    i(92, "Sublocation");
    i(95, "ProvinceState");
    i(100, "CountryPrimaryLocationCode");
    i(101, "CountryPrimaryLocationName");
    i(103, "OriginalTransmissionReference");

    //
    // editorial content
    //
    i(105, "Headline");
    i(110, "Credit");
    i(115, "Source");
    i(116, "CopyrightNotice");
    i(118, "Contact");
    i(120, "CaptionAbstract");
    i(122, "WriterEditor");
    i(125, "RasterizedCaption");

    //
    // image + language properties
    //
    i(130, "ImageType");
    i(131, "ImageOrientation");
    i(135, "LanguageIdentifier");

    //
    // audio properties
    //
    i(150, "AudioType");
    i(151, "AudioSamplingRate");
    i(152, "AudioSamplingResolution");
    i(153, "AudioDuration");
    i(154, "AudioOutcue");

    //
    // document ids + object preview
    //
    i(184, "JobId");
    i(185, "MasterDocumentId");
    i(186, "ShortDocumentId");
    i(187, "UniqueDocumentId");
    i(188, "OwnerId");
    i(200, "ObjectPreviewFileFormat");
    i(201, "ObjectPreviewFileVersion");
    i(202, "ObjectPreviewData");
}
