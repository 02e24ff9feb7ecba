//! County lists for the address forms, in display order.
//!
//! The UK list runs England, Scotland, Wales, then Northern Ireland. Within
//! each nation the order is alphabetical, but the list as a whole is not.

/// The 26 counties of the Republic of Ireland.
#[rustfmt::skip]
pub const IRISH_COUNTIES: &[&str] = &[
    "Carlow", "Cavan", "Clare", "Cork", "Donegal", "Dublin",
    "Galway", "Kerry", "Kildare", "Kilkenny", "Laois", "Leitrim",
    "Limerick", "Longford", "Louth", "Mayo", "Meath", "Monaghan",
    "Offaly", "Roscommon", "Sligo", "Tipperary", "Waterford",
    "Westmeath", "Wexford", "Wicklow",
];

/// UK counties and council areas.
#[rustfmt::skip]
pub const UK_COUNTIES: &[&str] = &[
    // England
    "Avon", "Bedfordshire", "Berkshire", "Buckinghamshire", "Cambridgeshire",
    "Cheshire", "Cleveland", "Cornwall", "Cumbria", "Derbyshire", "Devon",
    "Dorset", "Durham", "East Sussex", "Essex", "Gloucestershire",
    "Greater London", "Greater Manchester", "Hampshire", "Herefordshire",
    "Hertfordshire", "Isle of Wight", "Kent", "Lancashire", "Leicestershire",
    "Lincolnshire", "Merseyside", "Norfolk", "North Yorkshire", "Northamptonshire",
    "Northumberland", "Nottinghamshire", "Oxfordshire", "Rutland", "Shropshire",
    "Somerset", "South Yorkshire", "Staffordshire", "Suffolk", "Surrey",
    "Tyne and Wear", "Warwickshire", "West Midlands", "West Sussex",
    "West Yorkshire", "Wiltshire", "Worcestershire",
    // Scotland
    "Aberdeenshire", "Angus", "Argyll and Bute", "Clackmannanshire", "Dumfries and Galloway",
    "Dundee City", "East Ayrshire", "East Dunbartonshire", "East Lothian", "East Renfrewshire",
    "Edinburgh", "Falkirk", "Fife", "Glasgow City", "Highland", "Inverclyde",
    "Midlothian", "Moray", "North Ayrshire", "North Lanarkshire", "Orkney Islands",
    "Perth and Kinross", "Renfrewshire", "Scottish Borders", "Shetland Islands",
    "South Ayrshire", "South Lanarkshire", "Stirling", "West Dunbartonshire", "West Lothian",
    // Wales
    "Anglesey", "Blaenau Gwent", "Bridgend", "Caerphilly", "Cardiff", "Carmarthenshire",
    "Ceredigion", "Conwy", "Denbighshire", "Flintshire", "Gwynedd", "Merthyr Tydfil",
    "Monmouthshire", "Neath Port Talbot", "Newport", "Pembrokeshire", "Powys",
    "Rhondda Cynon Taf", "Swansea", "Torfaen", "Vale of Glamorgan", "Wrexham",
    // Northern Ireland
    "Antrim", "Armagh", "Down", "Fermanagh", "Londonderry", "Tyrone",
];

/// Copy a static list into owned strings for a configuration record.
pub(crate) fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| (*name).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ireland_has_twenty_six_counties() {
        assert_eq!(IRISH_COUNTIES.len(), 26);
        assert_eq!(IRISH_COUNTIES.first(), Some(&"Carlow"));
        assert_eq!(IRISH_COUNTIES.last(), Some(&"Wicklow"));
    }

    #[test]
    fn uk_list_covers_all_four_nations_in_order() {
        assert_eq!(UK_COUNTIES.len(), 105);
        let position = |name: &str| UK_COUNTIES.iter().position(|c| *c == name).unwrap();
        assert_eq!(position("Avon"), 0);
        assert_eq!(position("Aberdeenshire"), 47);
        assert_eq!(position("Anglesey"), 77);
        assert_eq!(position("Antrim"), 99);
        assert_eq!(UK_COUNTIES.last(), Some(&"Tyrone"));
    }

    #[test]
    fn owned_preserves_order() {
        let names = owned(IRISH_COUNTIES);
        assert_eq!(names.len(), IRISH_COUNTIES.len());
        assert_eq!(names[5], "Dublin");
    }
}
