// Built-in seed dictionary.
//
// Inserted once when the store is found empty on first initialization:
// clinical section headers plus common abbreviations. Keys are listed in
// canonical form so seeding writes exactly what lookups expect.

/// Default entries written into an empty store
pub const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    (":cc ", "Chief Complaint"),
    (":pi ", "Present Illness"),
    (":ros ", "Review of Systems"),
    (":pmh ", "Past Medical History"),
    (":s ", "Subjective"),
    (":o ", "Objective"),
    (":pe ", "Physical Exam"),
    (":a ", "Assessment"),
    (":p ", "Plan"),
    (":cmt ", "Comment"),
    (":dx ", "Diagnosis"),
    (":tx ", "Treatment"),
    (":rx ", "Prescription"),
    (":hpi ", "History of Present Illness"),
    (":fhx ", "Family History"),
    (":shx ", "Social History"),
    (":allergies ", "Allergies"),
    (":meds ", "Medications"),
    (":vs ", "Vital Signs"),
    (":cva ", "Cerebrovascular Accident"),
    (":mi ", "Myocardial Infarction"),
    (":dm ", "Diabetes Mellitus"),
    (":htn ", "Hypertension"),
    (":cad ", "Coronary Artery Disease"),
];
