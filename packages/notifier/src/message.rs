//! Message composition for blood-request notifications.
//!
//! Templates are fixed Somali-language plain text with `*…*` emphasis
//! markers; the gateway delivers them as-is, so no escaping happens here.
//! Composition is pure: every [`MessageKind`] maps to exactly one template
//! and unknown blood-type or urgency codes render verbatim.

use crate::types::{BloodRequest, MessageKind};

/// Render the message body for one kind of notification.
pub fn compose(kind: MessageKind, request: &BloodRequest) -> String {
    match kind {
        MessageKind::DonorAlert => donor_alert(request),
        MessageKind::AdminAlert => admin_alert(request),
        MessageKind::RequesterConfirmation => requester_confirmation(request),
    }
}

/// Display label for a stored blood type code.
///
/// Unknown codes come back unchanged so a new upstream value degrades to
/// showing the raw code instead of failing the whole dispatch.
pub fn blood_type_label(code: &str) -> &str {
    match code {
        "A_POSITIVE" => "A+",
        "A_NEGATIVE" => "A-",
        "B_POSITIVE" => "B+",
        "B_NEGATIVE" => "B-",
        "AB_POSITIVE" => "AB+",
        "AB_NEGATIVE" => "AB-",
        "O_POSITIVE" => "O+",
        "O_NEGATIVE" => "O-",
        other => other,
    }
}

/// Display label for a stored urgency code. Unknown codes render verbatim.
pub fn urgency_label(code: &str) -> &str {
    match code {
        "LOW" => "Hooseya",
        "MEDIUM" => "Dhexdhexaad",
        "HIGH" => "Degdeg Ah",
        other => other,
    }
}

/// Honorific for the patient. Anything that is not recognizably "male"
/// (including absent) gets the feminine form.
fn honorific(gender: Option<&str>) -> &'static str {
    match gender {
        Some(g) if g.eq_ignore_ascii_case("male") => "Mudane",
        _ => "Marwo",
    }
}

fn donor_alert(request: &BloodRequest) -> String {
    format!(
        "*Codsiga Dhiig Degdegga Ah*\n\
         \n\
         *Waxaa jira codsi degdeg ah oo dhiig loo baahan yahay goobta aad ku sugtahay:*\n\
         \n\
         *MACLUUMAADKA CODSIGA:*\n\
         *Magaca Buka:* {title} {name}\n\
         *Lambarka Xiriirka:* {phone}\n\
         *Isbitaalka:* {hospital}\n\
         *Goobta:* {location}\n\
         *Nooca Dhiigga:* {blood_type}\n\
         *Darajada Degdegga:* {urgency}\n\
         *Da'da Buka:* {age} sano\n\
         \n\
         *FADLAN KA QEYB QAADO!*\n\
         Haddii aad dhiig siin kartid, fadlan si degdeg ah ula xidhiidh qofka u baahan dhiigga lambarka kor ku xusan.\n\
         \n\
         *Waad ku mahadsan tahay samafalkaaga!*\n\
         - Badbaado Blood Donation App",
        title = honorific(request.gender.as_deref()),
        name = request.full_name,
        phone = request.phone,
        hospital = request.hospital,
        location = request.location,
        blood_type = blood_type_label(&request.blood_type),
        urgency = urgency_label(&request.urgency),
        age = request.age,
    )
}

fn admin_alert(request: &BloodRequest) -> String {
    format!(
        "*CODSI DHIIG CUSUB AYAA LA SOO DIBAY*\n\
         \n\
         *MACLUUMAADKA CODSIGA:*\n\
         *Magaca Buka:* {name}\n\
         *Lambarka Xiriirka:* {phone}\n\
         *Isbitaalka:* {hospital}\n\
         *Goobta:* {location}\n\
         *Nooca Dhiigga:* {blood_type}\n\
         *Darajada Degdegga:* {urgency}\n\
         *Da'da Qofka:* {age} sano\n\
         *Taariikhda:* {date}\n\
         \n\
         *FADLAN ANSIXI CODSIGAN SI DHIIG DEEDAYAASHA LOOGU DIRO WARGELIN!*\n\
         \n\
         *Waad ku mahadsan tahay!*\n\
         - Badbaado Blood Donation App",
        name = request.full_name,
        phone = request.phone,
        hospital = request.hospital,
        location = request.location,
        blood_type = blood_type_label(&request.blood_type),
        urgency = urgency_label(&request.urgency),
        age = request.age,
        date = request.created_at.format("%d/%m/%Y"),
    )
}

fn requester_confirmation(request: &BloodRequest) -> String {
    format!(
        "*Codsiga Dhiigga Waa la Ansixiyay*\n\
         \n\
         {title} {name},\n\
         \n\
         Codsigaaga dhiigga si guul leh ayaa loo ansixiyay! Waxaan hadda u diraynaa wargelin dadka ku nool goobtaada ee leh nooca dhiigga aad soo codsatay.\n\
         \n\
         *Macluumaadka Codsiga:*\n\
         *Isbitaalka:* {hospital}\n\
         *Goobta:* {location}\n\
         *Nooca Dhiigga:* {blood_type}\n\
         *Darajada:* {urgency}\n\
         *Da'da:* {age} sano\n\
         \n\
         Waxaan rajeyneynaa in sida ugu dhakhsaha badan ay usoo aqbalaan dad dhiig deeqayaal ah.\n\
         \n\
         *Mahadsanid!*\n\
         - Badbaado Blood Donation System",
        title = honorific(request.gender.as_deref()),
        name = request.full_name,
        hospital = request.hospital,
        location = request.location,
        blood_type = blood_type_label(&request.blood_type),
        urgency = urgency_label(&request.urgency),
        age = request.age,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RequestEvent;
    use chrono::TimeZone;

    fn sample_request() -> BloodRequest {
        BloodRequest {
            full_name: "Amina Hassan".to_string(),
            gender: Some("female".to_string()),
            phone: "0612345678".to_string(),
            hospital: "Banadir Hospital".to_string(),
            location: "Hodan, Muqdisho".to_string(),
            blood_type: "O_NEGATIVE".to_string(),
            urgency: "HIGH".to_string(),
            age: 34,
            created_at: chrono::Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap(),
            event: RequestEvent::Approved,
        }
    }

    #[test]
    fn test_blood_type_labels() {
        assert_eq!(blood_type_label("O_POSITIVE"), "O+");
        assert_eq!(blood_type_label("AB_NEGATIVE"), "AB-");
    }

    #[test]
    fn test_unknown_codes_render_verbatim() {
        assert_eq!(blood_type_label("RH_NULL"), "RH_NULL");
        assert_eq!(urgency_label("CRITICAL"), "CRITICAL");

        let mut request = sample_request();
        request.blood_type = "RH_NULL".to_string();
        request.urgency = "CRITICAL".to_string();
        let body = compose(MessageKind::DonorAlert, &request);
        assert!(body.contains("RH_NULL"));
        assert!(body.contains("CRITICAL"));
    }

    #[test]
    fn test_honorific_defaults_to_marwo() {
        assert_eq!(honorific(Some("male")), "Mudane");
        assert_eq!(honorific(Some("MALE")), "Mudane");
        assert_eq!(honorific(Some("female")), "Marwo");
        assert_eq!(honorific(Some("unspecified")), "Marwo");
        assert_eq!(honorific(None), "Marwo");
    }

    #[test]
    fn test_donor_alert_interpolates_request_fields() {
        let body = compose(MessageKind::DonorAlert, &sample_request());
        assert!(body.contains("Marwo Amina Hassan"));
        assert!(body.contains("0612345678"));
        assert!(body.contains("Banadir Hospital"));
        assert!(body.contains("O-"));
        assert!(body.contains("Degdeg Ah"));
        assert!(body.contains("34 sano"));
    }

    #[test]
    fn test_admin_alert_carries_request_date() {
        let body = compose(MessageKind::AdminAlert, &sample_request());
        assert!(body.contains("*Taariikhda:* 05/03/2024"));
        assert!(body.contains("CODSI DHIIG CUSUB"));
    }

    #[test]
    fn test_requester_confirmation_greets_by_honorific() {
        let mut request = sample_request();
        request.gender = Some("Male".to_string());
        let body = compose(MessageKind::RequesterConfirmation, &request);
        assert!(body.starts_with("*Codsiga Dhiigga Waa la Ansixiyay*"));
        assert!(body.contains("Mudane Amina Hassan,"));
    }

    #[test]
    fn test_each_kind_has_distinct_template() {
        let request = sample_request();
        let donor = compose(MessageKind::DonorAlert, &request);
        let admin = compose(MessageKind::AdminAlert, &request);
        let confirmation = compose(MessageKind::RequesterConfirmation, &request);
        assert_ne!(donor, admin);
        assert_ne!(admin, confirmation);
        assert_ne!(donor, confirmation);
    }
}
