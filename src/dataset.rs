//! Bundled country/city reference table for the typeahead location search.
//!
//! A static slice of ISO 3166-1 countries plus major world cities. The
//! lookup contract is case-insensitive substring matching with a capped
//! result count; see `handlers::places`.

/// (country name, ISO 3166-1 alpha-2 code)
pub const COUNTRIES: &[(&str, &str)] = &[
    ("Afghanistan", "AF"),
    ("Albania", "AL"),
    ("Algeria", "DZ"),
    ("Andorra", "AD"),
    ("Angola", "AO"),
    ("Antigua and Barbuda", "AG"),
    ("Argentina", "AR"),
    ("Armenia", "AM"),
    ("Australia", "AU"),
    ("Austria", "AT"),
    ("Azerbaijan", "AZ"),
    ("Bahamas", "BS"),
    ("Bahrain", "BH"),
    ("Bangladesh", "BD"),
    ("Barbados", "BB"),
    ("Belarus", "BY"),
    ("Belgium", "BE"),
    ("Belize", "BZ"),
    ("Benin", "BJ"),
    ("Bhutan", "BT"),
    ("Bolivia", "BO"),
    ("Bosnia and Herzegovina", "BA"),
    ("Botswana", "BW"),
    ("Brazil", "BR"),
    ("Brunei", "BN"),
    ("Bulgaria", "BG"),
    ("Burkina Faso", "BF"),
    ("Burundi", "BI"),
    ("Cambodia", "KH"),
    ("Cameroon", "CM"),
    ("Canada", "CA"),
    ("Cape Verde", "CV"),
    ("Central African Republic", "CF"),
    ("Chad", "TD"),
    ("Chile", "CL"),
    ("China", "CN"),
    ("Colombia", "CO"),
    ("Comoros", "KM"),
    ("Costa Rica", "CR"),
    ("Croatia", "HR"),
    ("Cuba", "CU"),
    ("Cyprus", "CY"),
    ("Czech Republic", "CZ"),
    ("Democratic Republic of the Congo", "CD"),
    ("Denmark", "DK"),
    ("Djibouti", "DJ"),
    ("Dominica", "DM"),
    ("Dominican Republic", "DO"),
    ("Ecuador", "EC"),
    ("Egypt", "EG"),
    ("El Salvador", "SV"),
    ("Equatorial Guinea", "GQ"),
    ("Eritrea", "ER"),
    ("Estonia", "EE"),
    ("Eswatini", "SZ"),
    ("Ethiopia", "ET"),
    ("Fiji", "FJ"),
    ("Finland", "FI"),
    ("France", "FR"),
    ("Gabon", "GA"),
    ("Gambia", "GM"),
    ("Georgia", "GE"),
    ("Germany", "DE"),
    ("Ghana", "GH"),
    ("Greece", "GR"),
    ("Grenada", "GD"),
    ("Guatemala", "GT"),
    ("Guinea", "GN"),
    ("Guinea-Bissau", "GW"),
    ("Guyana", "GY"),
    ("Haiti", "HT"),
    ("Honduras", "HN"),
    ("Hungary", "HU"),
    ("Iceland", "IS"),
    ("India", "IN"),
    ("Indonesia", "ID"),
    ("Iran", "IR"),
    ("Iraq", "IQ"),
    ("Ireland", "IE"),
    ("Israel", "IL"),
    ("Italy", "IT"),
    ("Ivory Coast", "CI"),
    ("Jamaica", "JM"),
    ("Japan", "JP"),
    ("Jordan", "JO"),
    ("Kazakhstan", "KZ"),
    ("Kenya", "KE"),
    ("Kiribati", "KI"),
    ("Kuwait", "KW"),
    ("Kyrgyzstan", "KG"),
    ("Laos", "LA"),
    ("Latvia", "LV"),
    ("Lebanon", "LB"),
    ("Lesotho", "LS"),
    ("Liberia", "LR"),
    ("Libya", "LY"),
    ("Liechtenstein", "LI"),
    ("Lithuania", "LT"),
    ("Luxembourg", "LU"),
    ("Madagascar", "MG"),
    ("Malawi", "MW"),
    ("Malaysia", "MY"),
    ("Maldives", "MV"),
    ("Mali", "ML"),
    ("Malta", "MT"),
    ("Marshall Islands", "MH"),
    ("Mauritania", "MR"),
    ("Mauritius", "MU"),
    ("Mexico", "MX"),
    ("Micronesia", "FM"),
    ("Moldova", "MD"),
    ("Monaco", "MC"),
    ("Mongolia", "MN"),
    ("Montenegro", "ME"),
    ("Morocco", "MA"),
    ("Mozambique", "MZ"),
    ("Myanmar", "MM"),
    ("Namibia", "NA"),
    ("Nauru", "NR"),
    ("Nepal", "NP"),
    ("Netherlands", "NL"),
    ("New Zealand", "NZ"),
    ("Nicaragua", "NI"),
    ("Niger", "NE"),
    ("Nigeria", "NG"),
    ("North Korea", "KP"),
    ("North Macedonia", "MK"),
    ("Norway", "NO"),
    ("Oman", "OM"),
    ("Pakistan", "PK"),
    ("Palau", "PW"),
    ("Panama", "PA"),
    ("Papua New Guinea", "PG"),
    ("Paraguay", "PY"),
    ("Peru", "PE"),
    ("Philippines", "PH"),
    ("Poland", "PL"),
    ("Portugal", "PT"),
    ("Qatar", "QA"),
    ("Republic of the Congo", "CG"),
    ("Romania", "RO"),
    ("Russia", "RU"),
    ("Rwanda", "RW"),
    ("Saint Kitts and Nevis", "KN"),
    ("Saint Lucia", "LC"),
    ("Saint Vincent and the Grenadines", "VC"),
    ("Samoa", "WS"),
    ("San Marino", "SM"),
    ("Sao Tome and Principe", "ST"),
    ("Saudi Arabia", "SA"),
    ("Senegal", "SN"),
    ("Serbia", "RS"),
    ("Seychelles", "SC"),
    ("Sierra Leone", "SL"),
    ("Singapore", "SG"),
    ("Slovakia", "SK"),
    ("Slovenia", "SI"),
    ("Solomon Islands", "SB"),
    ("Somalia", "SO"),
    ("South Africa", "ZA"),
    ("South Korea", "KR"),
    ("South Sudan", "SS"),
    ("Spain", "ES"),
    ("Sri Lanka", "LK"),
    ("Sudan", "SD"),
    ("Suriname", "SR"),
    ("Sweden", "SE"),
    ("Switzerland", "CH"),
    ("Syria", "SY"),
    ("Taiwan", "TW"),
    ("Tajikistan", "TJ"),
    ("Tanzania", "TZ"),
    ("Thailand", "TH"),
    ("Timor-Leste", "TL"),
    ("Togo", "TG"),
    ("Tonga", "TO"),
    ("Trinidad and Tobago", "TT"),
    ("Tunisia", "TN"),
    ("Turkey", "TR"),
    ("Turkmenistan", "TM"),
    ("Tuvalu", "TV"),
    ("Uganda", "UG"),
    ("Ukraine", "UA"),
    ("United Arab Emirates", "AE"),
    ("United Kingdom", "GB"),
    ("United States", "US"),
    ("Uruguay", "UY"),
    ("Uzbekistan", "UZ"),
    ("Vanuatu", "VU"),
    ("Vatican City", "VA"),
    ("Venezuela", "VE"),
    ("Vietnam", "VN"),
    ("Yemen", "YE"),
    ("Zambia", "ZM"),
    ("Zimbabwe", "ZW"),
];

/// (city name, ISO 3166-1 alpha-2 country code)
pub const CITIES: &[(&str, &str)] = &[
    ("Kabul", "AF"),
    ("Tirana", "AL"),
    ("Algiers", "DZ"),
    ("Buenos Aires", "AR"),
    ("Cordoba", "AR"),
    ("Yerevan", "AM"),
    ("Sydney", "AU"),
    ("Melbourne", "AU"),
    ("Brisbane", "AU"),
    ("Perth", "AU"),
    ("Vienna", "AT"),
    ("Salzburg", "AT"),
    ("Baku", "AZ"),
    ("Ganja", "AZ"),
    ("Sheki", "AZ"),
    ("Gabala", "AZ"),
    ("Manama", "BH"),
    ("Dhaka", "BD"),
    ("Minsk", "BY"),
    ("Brussels", "BE"),
    ("Bruges", "BE"),
    ("Antwerp", "BE"),
    ("La Paz", "BO"),
    ("Sarajevo", "BA"),
    ("Sao Paulo", "BR"),
    ("Rio de Janeiro", "BR"),
    ("Brasilia", "BR"),
    ("Salvador", "BR"),
    ("Sofia", "BG"),
    ("Phnom Penh", "KH"),
    ("Siem Reap", "KH"),
    ("Toronto", "CA"),
    ("Vancouver", "CA"),
    ("Montreal", "CA"),
    ("Ottawa", "CA"),
    ("Santiago", "CL"),
    ("Valparaiso", "CL"),
    ("Beijing", "CN"),
    ("Shanghai", "CN"),
    ("Shenzhen", "CN"),
    ("Guangzhou", "CN"),
    ("Chengdu", "CN"),
    ("Xian", "CN"),
    ("Bogota", "CO"),
    ("Medellin", "CO"),
    ("Cartagena", "CO"),
    ("San Jose", "CR"),
    ("Zagreb", "HR"),
    ("Split", "HR"),
    ("Dubrovnik", "HR"),
    ("Havana", "CU"),
    ("Nicosia", "CY"),
    ("Prague", "CZ"),
    ("Brno", "CZ"),
    ("Copenhagen", "DK"),
    ("Aarhus", "DK"),
    ("Santo Domingo", "DO"),
    ("Punta Cana", "DO"),
    ("Quito", "EC"),
    ("Guayaquil", "EC"),
    ("Cairo", "EG"),
    ("Alexandria", "EG"),
    ("Luxor", "EG"),
    ("Tallinn", "EE"),
    ("Addis Ababa", "ET"),
    ("Helsinki", "FI"),
    ("Paris", "FR"),
    ("Lyon", "FR"),
    ("Marseille", "FR"),
    ("Nice", "FR"),
    ("Bordeaux", "FR"),
    ("Strasbourg", "FR"),
    ("Tbilisi", "GE"),
    ("Batumi", "GE"),
    ("Kutaisi", "GE"),
    ("Berlin", "DE"),
    ("Munich", "DE"),
    ("Hamburg", "DE"),
    ("Frankfurt", "DE"),
    ("Cologne", "DE"),
    ("Dresden", "DE"),
    ("Accra", "GH"),
    ("Athens", "GR"),
    ("Thessaloniki", "GR"),
    ("Santorini", "GR"),
    ("Guatemala City", "GT"),
    ("Budapest", "HU"),
    ("Reykjavik", "IS"),
    ("Mumbai", "IN"),
    ("Delhi", "IN"),
    ("Bangalore", "IN"),
    ("Jaipur", "IN"),
    ("Agra", "IN"),
    ("Goa", "IN"),
    ("Jakarta", "ID"),
    ("Bali", "ID"),
    ("Yogyakarta", "ID"),
    ("Tehran", "IR"),
    ("Isfahan", "IR"),
    ("Baghdad", "IQ"),
    ("Dublin", "IE"),
    ("Galway", "IE"),
    ("Jerusalem", "IL"),
    ("Tel Aviv", "IL"),
    ("Rome", "IT"),
    ("Milan", "IT"),
    ("Venice", "IT"),
    ("Florence", "IT"),
    ("Naples", "IT"),
    ("Turin", "IT"),
    ("Kingston", "JM"),
    ("Tokyo", "JP"),
    ("Osaka", "JP"),
    ("Kyoto", "JP"),
    ("Sapporo", "JP"),
    ("Nara", "JP"),
    ("Amman", "JO"),
    ("Petra", "JO"),
    ("Almaty", "KZ"),
    ("Astana", "KZ"),
    ("Nairobi", "KE"),
    ("Mombasa", "KE"),
    ("Kuwait City", "KW"),
    ("Bishkek", "KG"),
    ("Vientiane", "LA"),
    ("Luang Prabang", "LA"),
    ("Riga", "LV"),
    ("Beirut", "LB"),
    ("Vilnius", "LT"),
    ("Luxembourg City", "LU"),
    ("Antananarivo", "MG"),
    ("Kuala Lumpur", "MY"),
    ("Penang", "MY"),
    ("Male", "MV"),
    ("Valletta", "MT"),
    ("Mexico City", "MX"),
    ("Cancun", "MX"),
    ("Guadalajara", "MX"),
    ("Oaxaca", "MX"),
    ("Chisinau", "MD"),
    ("Monaco", "MC"),
    ("Ulaanbaatar", "MN"),
    ("Podgorica", "ME"),
    ("Kotor", "ME"),
    ("Casablanca", "MA"),
    ("Marrakesh", "MA"),
    ("Fes", "MA"),
    ("Maputo", "MZ"),
    ("Yangon", "MM"),
    ("Windhoek", "NA"),
    ("Kathmandu", "NP"),
    ("Pokhara", "NP"),
    ("Amsterdam", "NL"),
    ("Rotterdam", "NL"),
    ("Utrecht", "NL"),
    ("Auckland", "NZ"),
    ("Wellington", "NZ"),
    ("Queenstown", "NZ"),
    ("Lagos", "NG"),
    ("Abuja", "NG"),
    ("Skopje", "MK"),
    ("Oslo", "NO"),
    ("Bergen", "NO"),
    ("Muscat", "OM"),
    ("Karachi", "PK"),
    ("Lahore", "PK"),
    ("Islamabad", "PK"),
    ("Panama City", "PA"),
    ("Asuncion", "PY"),
    ("Lima", "PE"),
    ("Cusco", "PE"),
    ("Manila", "PH"),
    ("Cebu", "PH"),
    ("Warsaw", "PL"),
    ("Krakow", "PL"),
    ("Gdansk", "PL"),
    ("Lisbon", "PT"),
    ("Porto", "PT"),
    ("Doha", "QA"),
    ("Bucharest", "RO"),
    ("Cluj-Napoca", "RO"),
    ("Moscow", "RU"),
    ("Saint Petersburg", "RU"),
    ("Kazan", "RU"),
    ("Sochi", "RU"),
    ("Kigali", "RW"),
    ("Riyadh", "SA"),
    ("Jeddah", "SA"),
    ("Dakar", "SN"),
    ("Belgrade", "RS"),
    ("Novi Sad", "RS"),
    ("Victoria", "SC"),
    ("Singapore", "SG"),
    ("Bratislava", "SK"),
    ("Ljubljana", "SI"),
    ("Cape Town", "ZA"),
    ("Johannesburg", "ZA"),
    ("Durban", "ZA"),
    ("Seoul", "KR"),
    ("Busan", "KR"),
    ("Jeju", "KR"),
    ("Madrid", "ES"),
    ("Barcelona", "ES"),
    ("Seville", "ES"),
    ("Valencia", "ES"),
    ("Granada", "ES"),
    ("Bilbao", "ES"),
    ("Colombo", "LK"),
    ("Kandy", "LK"),
    ("Stockholm", "SE"),
    ("Gothenburg", "SE"),
    ("Zurich", "CH"),
    ("Geneva", "CH"),
    ("Bern", "CH"),
    ("Lucerne", "CH"),
    ("Interlaken", "CH"),
    ("Damascus", "SY"),
    ("Taipei", "TW"),
    ("Dushanbe", "TJ"),
    ("Dar es Salaam", "TZ"),
    ("Zanzibar City", "TZ"),
    ("Bangkok", "TH"),
    ("Chiang Mai", "TH"),
    ("Phuket", "TH"),
    ("Lome", "TG"),
    ("Tunis", "TN"),
    ("Istanbul", "TR"),
    ("Ankara", "TR"),
    ("Antalya", "TR"),
    ("Izmir", "TR"),
    ("Cappadocia", "TR"),
    ("Ashgabat", "TM"),
    ("Kampala", "UG"),
    ("Kyiv", "UA"),
    ("Lviv", "UA"),
    ("Odesa", "UA"),
    ("Dubai", "AE"),
    ("Abu Dhabi", "AE"),
    ("Sharjah", "AE"),
    ("London", "GB"),
    ("Manchester", "GB"),
    ("Edinburgh", "GB"),
    ("Liverpool", "GB"),
    ("Glasgow", "GB"),
    ("New York", "US"),
    ("Los Angeles", "US"),
    ("Chicago", "US"),
    ("San Francisco", "US"),
    ("Miami", "US"),
    ("Las Vegas", "US"),
    ("Boston", "US"),
    ("Seattle", "US"),
    ("Washington", "US"),
    ("New Orleans", "US"),
    ("Montevideo", "UY"),
    ("Tashkent", "UZ"),
    ("Samarkand", "UZ"),
    ("Bukhara", "UZ"),
    ("Caracas", "VE"),
    ("Hanoi", "VN"),
    ("Ho Chi Minh City", "VN"),
    ("Da Nang", "VN"),
    ("Hoi An", "VN"),
    ("Lusaka", "ZM"),
    ("Harare", "ZW"),
];

/// Resolves a country name to its ISO alpha-2 code by exact,
/// case-insensitive match. Used to backfill `country_code` when the model
/// did not supply one.
pub fn country_code_for_name(name: &str) -> Option<&'static str> {
    let search = name.trim();
    if search.is_empty() {
        return None;
    }
    COUNTRIES
        .iter()
        .find(|(country, _)| country.eq_ignore_ascii_case(search))
        .map(|(_, code)| *code)
}

/// Resolves an ISO alpha-2 code back to the country name.
pub fn country_name_for_code(code: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}
