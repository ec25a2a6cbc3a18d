//! Submitted resources and their declared kind.
//!
//! - [`ResourceType`] - closed enumeration of FHIR R4 resource types
//! - [`Resource`] - a submitted resource: kind plus untouched JSON payload
//! - [`ResourceElement`] - normalized form handed to the validation engine

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValidateOperationError};

macro_rules! resource_types {
    ($($variant:ident),+ $(,)?) => {
        /// FHIR R4 resource type tag.
        ///
        /// Serialized as the FHIR type name (e.g. `"Patient"`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum ResourceType {
            $($variant,)+
        }

        impl ResourceType {
            /// Every known resource type, in alphabetical order.
            pub const ALL: &'static [ResourceType] = &[$(ResourceType::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ResourceType::$variant => stringify!($variant),)+
                }
            }
        }

        impl FromStr for ResourceType {
            type Err = ValidateOperationError;

            fn from_str(s: &str) -> Result<Self> {
                match s {
                    $(stringify!($variant) => Ok(ResourceType::$variant),)+
                    other => Err(ValidateOperationError::invalid_resource(format!(
                        "unknown resource type '{other}'"
                    ))),
                }
            }
        }
    };
}

resource_types! {
    Account,
    ActivityDefinition,
    AdverseEvent,
    AllergyIntolerance,
    Appointment,
    AppointmentResponse,
    AuditEvent,
    Basic,
    Binary,
    BiologicallyDerivedProduct,
    BodyStructure,
    Bundle,
    CapabilityStatement,
    CarePlan,
    CareTeam,
    CatalogEntry,
    ChargeItem,
    ChargeItemDefinition,
    Claim,
    ClaimResponse,
    ClinicalImpression,
    CodeSystem,
    Communication,
    CommunicationRequest,
    CompartmentDefinition,
    Composition,
    ConceptMap,
    Condition,
    Consent,
    Contract,
    Coverage,
    CoverageEligibilityRequest,
    CoverageEligibilityResponse,
    DetectedIssue,
    Device,
    DeviceDefinition,
    DeviceMetric,
    DeviceRequest,
    DeviceUseStatement,
    DiagnosticReport,
    DocumentManifest,
    DocumentReference,
    EffectEvidenceSynthesis,
    Encounter,
    Endpoint,
    EnrollmentRequest,
    EnrollmentResponse,
    EpisodeOfCare,
    EventDefinition,
    Evidence,
    EvidenceVariable,
    ExampleScenario,
    ExplanationOfBenefit,
    FamilyMemberHistory,
    Flag,
    Goal,
    GraphDefinition,
    Group,
    GuidanceResponse,
    HealthcareService,
    ImagingStudy,
    Immunization,
    ImmunizationEvaluation,
    ImmunizationRecommendation,
    ImplementationGuide,
    InsurancePlan,
    Invoice,
    Library,
    Linkage,
    List,
    Location,
    Measure,
    MeasureReport,
    Media,
    Medication,
    MedicationAdministration,
    MedicationDispense,
    MedicationKnowledge,
    MedicationRequest,
    MedicationStatement,
    MedicinalProduct,
    MedicinalProductAuthorization,
    MedicinalProductContraindication,
    MedicinalProductIndication,
    MedicinalProductIngredient,
    MedicinalProductInteraction,
    MedicinalProductManufactured,
    MedicinalProductPackaged,
    MedicinalProductPharmaceutical,
    MedicinalProductUndesirableEffect,
    MessageDefinition,
    MessageHeader,
    MolecularSequence,
    NamingSystem,
    NutritionOrder,
    Observation,
    ObservationDefinition,
    OperationDefinition,
    OperationOutcome,
    Organization,
    OrganizationAffiliation,
    Parameters,
    Patient,
    PaymentNotice,
    PaymentReconciliation,
    Person,
    PlanDefinition,
    Practitioner,
    PractitionerRole,
    Procedure,
    Provenance,
    Questionnaire,
    QuestionnaireResponse,
    RelatedPerson,
    RequestGroup,
    ResearchDefinition,
    ResearchElementDefinition,
    ResearchStudy,
    ResearchSubject,
    RiskAssessment,
    RiskEvidenceSynthesis,
    Schedule,
    SearchParameter,
    ServiceRequest,
    Slot,
    Specimen,
    SpecimenDefinition,
    StructureDefinition,
    StructureMap,
    Subscription,
    Substance,
    SubstanceNucleicAcid,
    SubstancePolymer,
    SubstanceProtein,
    SubstanceReferenceInformation,
    SubstanceSourceMaterial,
    SubstanceSpecification,
    SupplyDelivery,
    SupplyRequest,
    Task,
    TerminologyCapabilities,
    TestReport,
    TestScript,
    ValueSet,
    VerificationResult,
    VisionPrescription,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A submitted resource.
///
/// The payload is kept exactly as received; nothing in this crate mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    resource_type: ResourceType,
    payload: Value,
}

impl Resource {
    pub fn new(resource_type: ResourceType, payload: Value) -> Self {
        Self {
            resource_type,
            payload,
        }
    }

    /// Build a resource from its FHIR JSON form, reading the declared `resourceType`.
    pub fn from_json(payload: Value) -> Result<Self> {
        let resource_type = payload
            .get("resourceType")
            .and_then(Value::as_str)
            .ok_or_else(|| ValidateOperationError::invalid_resource("missing resourceType"))?
            .parse()?;

        Ok(Self {
            resource_type,
            payload,
        })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_json(serde_json::from_slice(bytes)?)
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn id(&self) -> Option<&str> {
        self.payload.get("id").and_then(Value::as_str)
    }

    /// Normalized form sent to the validation engine.
    pub fn to_resource_element(&self) -> ResourceElement {
        ResourceElement {
            resource_type: self.resource_type,
            id: self.id().map(str::to_owned),
            instance: self.payload.clone(),
        }
    }
}

/// Engine-facing view of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceElement {
    pub resource_type: ResourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub instance: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_type_round_trips_through_str() {
        for rt in ResourceType::ALL {
            assert_eq!(rt.as_str().parse::<ResourceType>().unwrap(), *rt);
        }
    }

    #[test]
    fn test_resource_type_catalogue() {
        assert_eq!(ResourceType::ALL.len(), 146);
        assert!(
            ResourceType::ALL
                .windows(2)
                .all(|w| w[0].as_str() < w[1].as_str())
        );
        assert_eq!(ResourceType::Parameters.to_string(), "Parameters");
    }

    #[test]
    fn test_unknown_resource_type() {
        let err = "Patients".parse::<ResourceType>().unwrap_err();
        assert!(matches!(err, ValidateOperationError::InvalidResource { .. }));
    }

    #[test]
    fn test_from_json() {
        let payload = json!({"resourceType": "Patient", "id": "pt-1", "active": true});
        let resource = Resource::from_json(payload.clone()).unwrap();

        assert_eq!(resource.resource_type(), ResourceType::Patient);
        assert_eq!(resource.id(), Some("pt-1"));
        assert_eq!(resource.payload(), &payload);
    }

    #[test]
    fn test_from_json_without_resource_type() {
        let err = Resource::from_json(json!({"id": "x"})).unwrap_err();
        assert!(matches!(err, ValidateOperationError::InvalidResource { .. }));
    }

    #[test]
    fn test_from_slice_rejects_malformed_json() {
        let err = Resource::from_slice(b"{not json").unwrap_err();
        assert!(matches!(err, ValidateOperationError::Serialization(_)));
    }

    #[test]
    fn test_resource_element_keeps_payload() {
        let payload = json!({"resourceType": "Observation", "status": "final"});
        let element = Resource::from_json(payload.clone())
            .unwrap()
            .to_resource_element();

        assert_eq!(element.resource_type, ResourceType::Observation);
        assert_eq!(element.id, None);
        assert_eq!(element.instance, payload);
    }
}
