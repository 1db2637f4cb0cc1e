//! Reply copy for every menu screen and lookup result.
//!
//! Menu text is kept literal per screen. The three main-menu renderings
//! differ slightly (section count, spacing, trailing prompt) and are not
//! unified.

use crate::domain::voter::VoterRecord;

pub const WELCOME_MENU: &str = "👋 Welcome to VoteAssist Idukki!\n\n\
Please select a section:\n\n\
1️⃣ General Instructions\n\n\
2️⃣ Voter Services\n\n\
3️⃣ BLO / ERO / DEO Info";

pub const RESTART_MENU: &str = "👋 Welcome to VoteAssist Idukki!\n\n\
Please select a section:\n\n\
1️⃣ General Instructions\n\n\
2️⃣ Voter Services\n\n\
3️⃣ BLO / ERO / DEO Info\n\n\
4️⃣ About your polling station\n\n\
Type a number to continue.";

/// Main menu shown when backing out of a section.
pub const RETURN_MAIN_MENU: &str = "Please select a section:\n\n\
1️⃣ General Instructions\n\n\
2️⃣ Voter Services\n\n\
3️⃣ BLO / ERO / DEO Info\n\n\
Type a number to continue.";

pub const MAIN_MENU_INVALID: &str = "Enter valid option🔧 Section not implemented yet.";

pub const GENERAL_MENU: &str = "🗂 General Instructions Menu:\n\n\
1️⃣ How to vote\n\n\
2️⃣ Valid ID proofs instead of voter ID\n\n\
3️⃣ 🔙 Back to Main Menu";

/// General menu shown when backing out of a general submenu.
pub const RETURN_GENERAL_MENU: &str = "🗂 General Instructions Menu:\n\n\
1️⃣ How to vote\n\n\
2️⃣ Valid ID proofs instead of voter ID\n\n\
3️⃣ Back to Main Menu 🔙";

pub const VOTER_SERVICES_MENU: &str = "🗂 Voter Services\n\n\
1️⃣ How to enroll as a new voter\n\n\
2️⃣ How to delete voter ID\n\n\
3️⃣ How to shift address/change constituency\n\n\
4️⃣ How to download Voter ID(E-Epic)\n\n\
5️⃣ Search your details in electoral roll";

pub const INVALID_OPTION: &str = "❌ Invalid option. Please enter a valid option";

pub const HOW_TO_VOTE: &str = "🗳 How to Vote:\n\n\
• Visit your polling station with voter ID.\n\
• Visit the first polling officer to verify your ID.\n\
• Get the ink mark, signature, and voter slip from the second polling officer.\n\
• Visit the third polling officer for ink verification and activation of the ballot unit.\n\
• Cast your vote by clicking the button next to the candidate.\n\
• Verify your choice with the VVPAT slip.\n\n\
📽 Watch this video for more details:\nhttps://youtu.be/XGJQNKFYqYI?si=VzRIkN11uyadzqDo\n\n\
3️⃣ Go Back to General Instructions Menu";

pub const VALID_ID_PROOFS: &str = "🪪 Approved Identity Documents for Voting:\n\n\
• Aadhaar Card\n\
• PAN Card\n\
• Unique Disability ID (UDID) Card\n\
• Service Identity Card\n\
• Passbook with Photo by Bank/Post Office\n\
• Health Insurance Smart Card (Ministry of Labour)\n\
• Driving License\n\
• Indian Passport\n\
• Smart Card by RGI under NPR\n\
• Pension Document with Photograph\n\
• ID Card for MPs/MLAs/MLCs\n\
• MGNREGA Job Card\n\n\
⿣ Go Back to General Instructions Menu";

pub const EPIC_DOWNLOAD_STEPS: &str = "1. Visit voters service portal www.voters.eci.gov.in.\n\
2. Login the website.\n\
3. Select download e-EPIC.\n\
4. Verify by entering your EPIC number.\n\
5. Download your e-EPIC.\n";

pub const UPDATE_VOTER_DETAIL_STEPS: &str = "1. Install voter helpline app.\n\
2. Login or create account.\n\
3. Select voter registration.\n\
4. Select “Correction of entries (FORM 8)”.\n\
5. Enter your EPIC number.\n\
6. Edit the details you want to update.\n\
7. Upload the address proof.\n\
8. Submit the form.";

pub const FIND_POLLING_STATION_STEPS: &str = "1. Visit www.voters.eci.gov.in\n\
2. Login and click “Know your polling station & officer”.\n\
3. Enter your EPIC number.\n\
4. Your polling station and BLO details will be displayed.";

pub const NO_INSTRUCTIONS: &str = "No instructions found.";

pub const PROMPT_FULL_NAME: &str =
    "📝 Please enter your *full name* to search for your voter details.";
pub const PROMPT_DOB: &str = "📅 Now, please enter your *date of birth* (YYYY-MM-DD).";
pub const PROMPT_RELATIVE: &str = "👪 Lastly, enter your *father’s or relative’s name*.";
pub const MISSING_DOB_OR_NAME: &str = "⚠️ Missing DOB or name. Please restart the process.";
pub const MISSING_SEARCH_DATA: &str =
    "⚠️ Missing some data. Please restart the process by entering your full name.";
pub const VOTER_NOT_FOUND: &str =
    "❌ No matching voter record found. Please check your inputs or try again.";

pub const PROMPT_NAME_FOR_DETAILS: &str =
    "Please provide your full name so I can find your voter details.";
pub const DETAILS_NOT_FOUND: &str =
    "No voter details found for the provided name and phone number.";

pub const PROMPT_VOTER_ID_FOR_BLO: &str =
    "Please provide your voter ID so I can find the BLO for your area.";
pub const BLO_STATION_NOT_FOUND: &str = "❌ No polling station found for the provided voter ID.";

pub const PROMPT_VOTER_ID_FOR_LOCATION: &str =
    "Please provide your voter ID to get your polling location.";
pub const LOCATION_NOT_FOUND: &str = "No polling station found for the given voter ID.";

pub const DEFAULT_FALLBACK: &str = "I didn’t understand that. Can you say it differently?";
pub const UNKNOWN_INTENT: &str = "I could not understand your request.";

/// Reply for a failed lookup. Always opens with an apology.
pub fn lookup_failed(what: &str) -> String {
    format!(
        "⚠️ Sorry, an error occurred while fetching {}. Please try again later.",
        what
    )
}

fn or_na(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("N/A")
}

/// Detail card for a record found through the three-step roll search.
pub fn voter_search_card(voter: &VoterRecord) -> String {
    let dob = voter
        .date_of_birth
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "✅ *Voter Details Found:*\n\
Name: *{}*\n\
DOB: *{}*\n\
Relative: *{}*\n\
Voter ID: *{}*\n\
Booth: *{}*\n\
Booth No: *{}*\n\
Assembly Constituency name: *{}*\n\
Address: *{}*",
        voter.full_name,
        dob,
        or_na(&voter.relative_name),
        voter.voter_id,
        or_na(&voter.part_name),
        or_na(&voter.part_number),
        or_na(&voter.assembly_constituency_name),
        or_na(&voter.house_address),
    )
}

/// Detail card for a record found by name and phone number.
pub fn voter_details_card(voter: &VoterRecord) -> String {
    let dob = voter
        .date_of_birth
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let address = [
        &voter.house_address,
        &voter.place,
        &voter.district,
        &voter.state,
    ]
    .iter()
    .filter_map(|part| part.as_deref())
    .collect::<Vec<_>>()
    .join(", ");
    let address = match &voter.pincode {
        Some(pin) if !address.is_empty() => format!("{} - {}", address, pin),
        Some(pin) => pin.clone(),
        None if address.is_empty() => "N/A".to_string(),
        None => address,
    };

    format!(
        concat!(
            " VOTER DETAILS:\n",
            " Voter ID: {}\n",
            " Name: {}\n",
            " Relative's Name: {}\n",
            " Gender: {}\n",
            " DOB: {}\n",
            " Address: {}\n",
            " Assembly Constituency:  {}\n",
            " Part: {} - {}\n",
            " Polling Station: {}",
        ),
        voter.voter_id,
        voter.full_name,
        or_na(&voter.relative_name),
        or_na(&voter.gender),
        dob,
        address,
        or_na(&voter.assembly_constituency_name),
        or_na(&voter.part_number),
        or_na(&voter.part_name),
        or_na(&voter.polling_station_address),
    )
}

pub fn blo_details(polling_station: &str, blo_name: &str) -> String {
    format!(
        " BLO Details:\n Polling Station: {}\n BLO Name: {}",
        polling_station, blo_name
    )
}

pub fn blo_missing(polling_station: &str) -> String {
    format!(
        "✅ Polling station: {}\n❌ No BLO information available.",
        polling_station
    )
}

/// Google Maps search link for an address.
pub fn maps_link(address: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(address)
    )
}

pub fn polling_location(address: &str) -> String {
    format!(
        "Your Polling Station Address:\n{}\n\n📍 Location on Map:\n{}",
        address,
        maps_link(address)
    )
}
