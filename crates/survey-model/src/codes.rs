//! Code tables backing [`crate::Vocabulary`].
//!
//! Each table lists `(code, label)` pairs in survey order. A few lists carry an
//! alias for an already-used code; lookups keep the first label.

pub(crate) const INTERVIEW_LOCATION: &[(i64, &str)] = &[
    (1, "TERMINAL_1"),
    (2, "TERMINAL_2_EAST"),
    (3, "TERMINAL_2_WEST"),
    (4, "RENTAL_CAR_CENTER"),
    (5, "EMPLOYEE_PARKING_LOT"),
    (98, "OTHER_SPECIFY"),
];

pub(crate) const INBOUND_OUTBOUND: &[(i64, &str)] = &[
    (1, "INBOUND_TO_AIRPORT"),
    (2, "OUTBOUND_FROM_AIRPORT"),
];

pub(crate) const MARKET_SEGMENT: &[(i64, &str)] = &[
    (1, "PASSENGER"),
    (2, "EMPLOYEE"),
    (98, "OTHER_SPECIFY"),
];

pub(crate) const PASSENGER_TYPE: &[(i64, &str)] = &[
    (1, "DEPARTING"),
    (2, "ARRIVING"),
];

pub(crate) const RESIDENT_VISITOR_GENERAL: &[(i64, &str)] = &[
    (1, "GOING_HOME_OR_VISITING"),
    (2, "LEAVING_HOME_OR_COMING_HOME"),
    (3, "NEITHER"),
];

pub(crate) const RESIDENT_VISITOR: &[(i64, &str)] = &[
    (1, "SAN_DIEGO_REGION"),
    (2, "OTHER_SOUTHERN_CALIFORNIA"),
    (3, "OTHER_CALIFORNIA"),
    (4, "TIJUANA_REGION"),
    (5, "OTHER_BAJA_CALIFORNIA"),
    (6, "OTHER_STATE_US"),
    (7, "OTHER_STATE_MEXICO"),
    (8, "NONE_OF_THE_ABOVE"),
];

pub(crate) const COUNTRY: &[(i64, &str)] = &[
    (1, "UNITED_STATES"),
    (2, "MEXICO"),
    (3, "AFGHANISTAN"),
    (4, "ALBANIA"),
    (5, "ALGERIA"),
    (6, "ANDORRA"),
    (7, "ANGOLA"),
    (8, "ANTIGUA_AND_BARBUDA"),
    (9, "ARGENTINA"),
    (10, "ARMENIA"),
    (11, "AUSTRALIA"),
    (12, "AUSTRIA"),
    (13, "AZERBAIJAN"),
    (14, "BAHAMAS"),
    (15, "BAHRAIN"),
    (16, "BANGLADESH"),
    (17, "BARBADOS"),
    (18, "BELARUS"),
    (19, "BELGIUM"),
    (20, "BELIZE"),
    (21, "BENIN"),
    (22, "BHUTAN"),
    (23, "BOLIVIA"),
    (24, "BOSNIA_AND_HERZEGOVINA"),
    (25, "BOTSWANA"),
    (26, "BRAZIL"),
    (27, "BRUNEI"),
    (28, "BULGARIA"),
    (29, "BURKINA_FASO"),
    (30, "BURUNDI"),
    (31, "COTE_DIVOIRE"),
    (32, "CABO_VERDE"),
    (33, "CAMBODIA"),
    (34, "CAMEROON"),
    (35, "CANADA"),
    (36, "CENTRAL_AFRICAN_REPUBLIC"),
    (37, "CHAD"),
    (38, "CHILE"),
    (39, "CHINA"),
    (40, "COLOMBIA"),
    (41, "COMOROS"),
    (42, "CONGO_CONGO_BRAZZAVILLE"),
    (43, "COSTA_RICA"),
    (44, "CROATIA"),
    (45, "CUBA"),
    (46, "CYPRUS"),
    (47, "CZECHIA_CZECH_REPUBLIC"),
    (48, "DEMOCRATIC_REPUBLIC_OF_THE_CONGO"),
    (49, "DENMARK"),
    (50, "DJIBOUTI"),
    (51, "DOMINICA"),
    (52, "DOMINICAN_REPUBLIC"),
    (53, "ECUADOR"),
    (54, "EGYPT"),
    (55, "EL_SALVADOR"),
    (56, "EQUATORIAL_GUINEA"),
    (57, "ERITREA"),
    (58, "ESTONIA"),
    (59, "ESWATINI_FMR_SWAZILAND"),
    (60, "ETHIOPIA"),
    (61, "FIJI"),
    (62, "FINLAND"),
    (63, "FRANCE"),
    (64, "GABON"),
    (65, "GAMBIA"),
    (66, "GEORGIA"),
    (67, "GERMANY"),
    (68, "GHANA"),
    (69, "GREECE"),
    (70, "GRENADA"),
    (71, "GUATEMALA"),
    (72, "GUINEA"),
    (73, "GUINEA_BISSAU"),
    (74, "GUYANA"),
    (75, "HAITI"),
    (76, "HOLY_SEE"),
    (77, "HONDURAS"),
    (78, "HUNGARY"),
    (79, "ICELAND"),
    (80, "INDIA"),
    (81, "INDONESIA"),
    (82, "IRAN"),
    (83, "IRAQ"),
    (84, "IRELAND"),
    (85, "ISRAEL"),
    (86, "ITALY"),
    (87, "JAMAICA"),
    (88, "JAPAN"),
    (89, "JORDAN"),
    (90, "KAZAKHSTAN"),
    (91, "KENYA"),
    (92, "KIRIBATI"),
    (93, "KUWAIT"),
    (94, "KYRGYZSTAN"),
    (95, "LAOS"),
    (96, "LATVIA"),
    (97, "LEBANON"),
    (98, "LESOTHO"),
    (99, "LIBERIA"),
    (100, "LIBYA"),
    (101, "LIECHTENSTEIN"),
    (102, "LITHUANIA"),
    (103, "LUXEMBOURG"),
    (104, "MADAGASCAR"),
    (105, "MALAWI"),
    (106, "MALAYSIA"),
    (107, "MALDIVES"),
    (108, "MALI"),
    (109, "MALTA"),
    (110, "MARSHALL_ISLANDS"),
    (111, "MAURITANIA"),
    (112, "MAURITIUS"),
    (113, "MICRONESIA"),
    (114, "MOLDOVA"),
    (115, "MONACO"),
    (116, "MONGOLIA"),
    (117, "MONTENEGRO"),
    (118, "MOROCCO"),
    (119, "MOZAMBIQUE"),
    (120, "MYANMAR_FORMERLY_BURMA"),
    (121, "NAMIBIA"),
    (122, "NAURU"),
    (123, "NEPAL"),
    (124, "NETHERLANDS"),
    (125, "NEW_ZEALAND"),
    (126, "NICARAGUA"),
    (127, "NIGER"),
    (128, "NIGERIA"),
    (129, "NORTH_KOREA"),
    (130, "NORTH_MACEDONIA"),
    (131, "NORWAY"),
    (132, "OMAN"),
    (133, "PAKISTAN"),
    (134, "PALAU"),
    (135, "PALESTINE_STATE"),
    (136, "PANAMA"),
    (137, "PAPUA_NEW_GUINEA"),
    (138, "PARAGUAY"),
    (139, "PERU"),
    (140, "PHILIPPINES"),
    (141, "POLAND"),
    (142, "PORTUGAL"),
    (143, "QATAR"),
    (144, "ROMANIA"),
    (145, "RUSSIA"),
    (146, "RWANDA"),
    (147, "SAINT_KITTS_AND_NEVIS"),
    (148, "SAINT_LUCIA"),
    (149, "SAINT_VINCENT_AND_THE_GRENADINES"),
    (150, "SAMOA"),
    (151, "SAN_MARINO"),
    (152, "SAO_TOME_AND_PRINCIPE"),
    (153, "SAUDI_ARABIA"),
    (154, "SENEGAL"),
    (155, "SERBIA"),
    (156, "SEYCHELLES"),
    (157, "SIERRA_LEONE"),
    (158, "SINGAPORE"),
    (159, "SLOVAKIA"),
    (160, "SLOVENIA"),
    (161, "SOLOMON_ISLANDS"),
    (162, "SOMALIA"),
    (163, "SOUTH_AFRICA"),
    (164, "SOUTH_KOREA"),
    (165, "SOUTH_SUDAN"),
    (166, "SPAIN"),
    (167, "SRI_LANKA"),
    (168, "SUDAN"),
    (169, "SURINAME"),
    (170, "SWEDEN"),
    (171, "SWITZERLAND"),
    (172, "SYRIA"),
    (173, "TAJIKISTAN"),
    (174, "TANZANIA"),
    (175, "THAILAND"),
    (176, "TIMOR_LESTE"),
    (177, "TOGO"),
    (178, "TONGA"),
    (179, "TRINIDAD_AND_TOBAGO"),
    (180, "TUNISIA"),
    (181, "TURKEY"),
    (182, "TURKMENISTAN"),
    (183, "TUVALU"),
    (184, "UGANDA"),
    (185, "UKRAINE"),
    (186, "UNITED_ARAB_EMIRATES"),
    (187, "UNITED_KINGDOM"),
    (188, "URUGUAY"),
    (189, "UZBEKISTAN"),
    (190, "VANUATU"),
    (191, "VENEZUELA"),
    (192, "VIETNAM"),
    (193, "YEMEN"),
    (194, "ZAMBIA"),
    (195, "ZIMBABWE"),
];

pub(crate) const STATE: &[(i64, &str)] = &[
    (1, "ALABAMA"),
    (2, "ALASKA"),
    (3, "AMERICAN_SAMOA"),
    (4, "ARIZONA"),
    (5, "ARKANSAS"),
    (6, "CALIFORNIA"),
    (7, "COLORADO"),
    (8, "CONNECTICUT"),
    (9, "DELAWARE"),
    (10, "DISTRICT_OF_COLUMBIA"),
    (11, "FLORIDA"),
    (12, "GEORGIA"),
    (13, "GUAM"),
    (14, "HAWAII"),
    (15, "IDAHO"),
    (16, "ILLINOIS"),
    (17, "INDIANA"),
    (18, "IOWA"),
    (19, "KANSAS"),
    (20, "KENTUCKY"),
    (21, "LOUISIANA"),
    (22, "MAINE"),
    (23, "MARYLAND"),
    (24, "MASSACHUSETTS"),
    (25, "MICHIGAN"),
    (26, "MINNESOTA"),
    (27, "MISSISSIPPI"),
    (28, "MISSOURI"),
    (29, "MONTANA"),
    (30, "NEBRASKA"),
    (31, "NEVADA"),
    (32, "NEW_HAMPSHIRE"),
    (33, "NEW_JERSEY"),
    (34, "NEW_MEXICO"),
    (35, "NEW_YORK"),
    (36, "NORTH_CAROLINA"),
    (37, "NORTH_DAKOTA"),
    (38, "NORTHERN_MARIANA_ISLANDS"),
    (39, "OHIO"),
    (40, "OKLAHOMA"),
    (41, "OREGON"),
    (42, "PENNSYLVANIA"),
    (43, "PUERTO_RICO"),
    (44, "RHODE_ISLAND"),
    (45, "SOUTH_CAROLINA"),
    (46, "SOUTH_DAKOTA"),
    (47, "TENNESSEE"),
    (48, "TEXAS"),
    (49, "UTAH"),
    (50, "VERMONT"),
    (51, "VIRGINIA"),
    (52, "VIRGIN_ISLANDS"),
    (53, "WASHINGTON"),
    (54, "WEST_VIRGINIA"),
    (55, "WISCONSIN"),
    (56, "WYOMING"),
    (57, "AGUASCALIENTES"),
    (58, "BAJA_CALIFORNIA"),
    (59, "BAJA_CALIFORNIA_SUR"),
    (60, "CAMPECHE"),
    (61, "CHIAPAS"),
    (62, "CHIHUAHUA"),
    (63, "COAHUILA"),
    (64, "COLIMA"),
    (65, "CIUDAD_DE_MEXICO"),
    (66, "DURANGO"),
    (67, "GUANAJUATO"),
    (68, "GUERRERO"),
    (69, "HIDALGO"),
    (70, "JALISCO"),
    (71, "MEXICO_STATE"),
    (72, "MICHOACAN"),
    (73, "MORELOS"),
    (74, "NAYARIT"),
    (75, "NUEVO_LEON"),
    (76, "OAXACA"),
    (77, "PUEBLA"),
    (78, "QUERETARO"),
    (79, "QUINTANA_ROO"),
    (80, "SAN_LUIS_POTOSI"),
    (81, "SINALOA"),
    (82, "SONORA"),
    (83, "TABASCO"),
    (84, "TAMAULIPAS"),
    (85, "TLAXCALA"),
    (86, "VERACRUZ"),
    (87, "YUCATAN"),
    (88, "ZACATECAS"),
    (99, "NOT_US_OR_MEXICO_RESIDENT"),
];

pub(crate) const TERMINAL: &[(i64, &str)] = &[
    (1, "TERMINAL_1"),
    (2, "TERMINAL_2"),
    (99, "UNKNOWN"),
];

pub(crate) const AIRLINE: &[(i64, &str)] = &[
    (1, "AIR_CANADA"),
    (2, "ALASKA_AIRLINES"),
    (3, "ALLEGIANT_AIR"),
    (4, "AMERICAN_AIRLINES"),
    (5, "BREEZE"),
    (6, "BRITISH_AIRWAYS"),
    (7, "DELTA_AIRLINES"),
    (8, "HAWAIIAN_AIRLINES"),
    (9, "JAPAN_AIRLINES"),
    (10, "JETBLUE"),
    (11, "LUFTHANSHA"),
    (12, "UNITED_AIRLINES"),
    (13, "WESTJET"),
    (14, "FRONTIER_AIRLINES"),
    (15, "SOUTHWEST_AIRLINES"),
    (16, "SPIRIT"),
    (17, "SUNCOUNTY_AIRLINES"),
    (98, "OTHER_SPECIFY"),
];

pub(crate) const DEPART_TIME: &[(i64, &str)] = &[
    (1, "FIVE_TO_FIVE_THIRTY"),
    (2, "FIVE_THIRTY_TO_SIX"),
    (3, "SIX_TO_SIX_THIRTY"),
    (4, "SIX_THIRTY_TO_SEVEN"),
    (5, "SEVEN_TO_SEVEN_THIRTY"),
    (6, "SEVEN_THIRTY_TO_EIGHT"),
    (7, "EIGHT_TO_EIGHT_THIRTY"),
    (8, "EIGHT_THIRTY_TO_NINE"),
    (9, "NINE_TO_NINE_THIRTY"),
    (10, "NINE_THIRTY_TO_TEN"),
    (11, "TEN_TO_TEN_THIRTY"),
    (12, "TEN_THIRTY_TO_ELEVEN"),
    (13, "ELEVEN_TO_ELEVEN_THIRTY"),
    (14, "ELEVEN_THIRTY_TO_NOON"),
    (15, "NOON_TO_TWELVE_THIRTY"),
    (16, "TWELVE_THIRTY_TO_THIRTEEN"),
    (17, "THIRTEEN_TO_THIRTEEN_THIRTY"),
    (18, "THIRTEEN_THIRTY_TO_FOURTEEN"),
    (19, "FOURTEEN_TO_FOURTEEN_THIRTY"),
    (20, "FOURTEEN_THIRTY_TO_FIFTEEN"),
    (21, "FIFTEEN_TO_FIFTEEN_THIRTY"),
    (22, "FIFTEEN_THIRTY_TO_SIXTEEN"),
    (23, "SIXTEEN_TO_SIXTEEN_THIRTY"),
    (24, "SIXTEEN_THIRTY_TO_SEVENTEEN"),
    (25, "SEVENTEEN_TO_SEVENTEEN_THIRTY"),
    (26, "SEVENTEEN_THIRTY_TO_EIGHTEEN"),
    (27, "EIGHTEEN_TO_EIGHTEEN_THIRTY"),
    (28, "EIGHTEEN_THIRTY_TO_NINETEEN"),
    (29, "NINETEEN_TO_NINETEEN_THIRTY"),
    (30, "NINETEEN_THIRTY_TO_TWENTY"),
    (31, "TWENTY_TO_TWENTY_THIRTY"),
    (32, "TWENTY_THIRTY_TO_TWENTY_ONE"),
    (33, "TWENTY_ONE_TO_TWENTY_ONE_THIRTY"),
    (34, "TWENTY_ONE_THIRTY_TO_TWENTY_TWO"),
    (35, "TWENTY_TWO_TO_TWENTY_TWO_THIRTY"),
    (36, "TWENTY_TWO_THIRTY_TO_TWENTY_THREE"),
    (37, "TWENTY_THREE_TO_TWENTY_THREE_THIRTY"),
    (38, "TWENTY_THREE_THIRTY_TO_MIDNIGHT"),
    (39, "MIDNIGHT_TO_ZERO_THIRTY"),
    (40, "ZERO_THIRTY_TO_ONE"),
    (41, "ONE_TO_ONE_THIRTY"),
    (42, "ONE_THIRTY_TO_TWO"),
    (43, "TWO_TO_TWO_THIRTY"),
    (44, "TWO_THIRTY_TO_THREE"),
    (45, "THREE_TO_THREE_THIRTY"),
    (46, "THREE_THIRTY_TO_FOUR"),
    (47, "FOUR_TO_FOUR_THIRTY"),
    (48, "FOUR_THIRTY_TO_FIVE"),
];

pub(crate) const FLIGHT_PURPOSE: &[(i64, &str)] = &[
    (1, "BUSINESS_WORK"),
    (2, "LEISURE_FAMILY"),
    (3, "COMBINATION_BUSINESS_LEISURE"),
    (4, "PERSONAL"),
    (5, "SCHOOL"),
    (6, "COMMUTE"),
    (98, "OTHER_SPECIFY"),
];

pub(crate) const CONVENTION_CENTER_ACTIVITY: &[(i64, &str)] = &[
    (1, "ATTENDEE"),
    (2, "EXHIBITOR"),
    (3, "MEETING_PLANNER"),
    (4, "CONTRACTOR"),
    (98, "OTHER_SPECIFY"),
    (99, "NOT_APPLICABLE"),
];

pub(crate) const CHECKED_BAGS: &[(i64, &str)] = &[
    (0, "NONE"),
    (1, "ONE"),
    (2, "TWO"),
    (3, "THREE"),
    (4, "FOUR"),
    (5, "FIVE"),
    (6, "SIX"),
    (7, "SEVEN"),
    (8, "EIGHT_OR_MORE"),
];

pub(crate) const CARRY_ONS: &[(i64, &str)] = &[
    (0, "NONE"),
    (1, "ONE"),
    (2, "TWO"),
    (3, "THREE"),
    (4, "FOUR"),
    (5, "FIVE"),
    (6, "SIX"),
    (7, "SEVEN"),
    (8, "EIGHT_OR_MORE"),
];

pub(crate) const TRAVEL_DURATION: &[(i64, &str)] = &[
    (1, "NONE"),
    (2, "ONE"),
    (3, "TWO"),
    (4, "THREE"),
    (5, "FOUR"),
    (6, "FIVE"),
    (7, "SIX"),
    (8, "SEVEN"),
    (9, "EIGHT_TO_TEN"),
    (10, "ELEVEN_TO_FOURTEEN"),
    (11, "MORE_THAN_FOURTEEN"),
];

pub(crate) const PARTY_SIZE: &[(i64, &str)] = &[
    (1, "ONE"),
    (2, "TWO"),
    (3, "THREE"),
    (4, "FOUR"),
    (5, "FIVE"),
    (6, "SIX"),
    (7, "SEVEN_OR_MORE"),
];

pub(crate) const SAN_BUILDINGS: &[(i64, &str)] = &[
    (1, "TERMINAL_1"),
    (2, "TERMINAL_2"),
    (3, "SDCRAA_ADMIN_BLDG"),
    (4, "QHP_LIBERTY_STATION"),
    (5, "SDCRAA_ADC_TRAILERS"),
    (6, "AIRLINE_SUPPORT_BLDG_HARBOR_DRIVE"),
    (7, "AIR_CARGO_NORTH"),
    (8, "RENTAL_CAR_CENTER"),
    (9, "RECEIVING_DISTRIBUTION_CENTER"),
    (10, "SIGNATURE_FLIGHT_SUPPORT"),
    (98, "OTHER_SPECIFY"),
];

pub(crate) const EMPLOYERS: &[(i64, &str)] = &[
    (1, "AIR_CANADA"),
    (2, "ALASKA_AIRLINES"),
    (3, "ALLEGIANT_AIR"),
    (4, "AMERICAN_AIRLINES"),
    (5, "APRICOT_LANE"),
    (6, "ARTISAN_MARKET"),
    (7, "BAGGAGE_CARTS_SMARTE_CARTE"),
    (8, "BANKERS_HILL_BAR_RESTAURANT"),
    (9, "BE_RELAX_SPA"),
    (10, "BEAUDEVIN_WINE_BAR"),
    (11, "BREEZE"),
    (12, "BRIGHTON_COLLECTIBLES"),
    (13, "BRITISH_AIRWAYS"),
    (14, "BROOKS_BROTHERS"),
    (15, "BUBBLES"),
    (16, "BURGER_KING"),
    (17, "CALIFORNIA_PIZZA_KITCHEN"),
    (18, "CAMDEN_FOOD_CO"),
    (19, "CNBC_NEWS_SAN_DIEGO"),
    (20, "CURRENCY_EXCHANGE_ICE_CURRENCY_SERVICES"),
    (21, "DELTA_AIRLINES"),
    (22, "DISCOVER_SAN_DIEGO"),
    (23, "DUTY_FREE_AMERICAS"),
    (24, "EINSTEIN_BROS_BAGELS"),
    (25, "ELEGANT_DESSERTS"),
    (26, "FRONTIER_AIRLINES"),
    (27, "GASLAMP_QUARTER_NEWS"),
    (28, "HAWAIIAN_AIRLINES"),
    (29, "HUDSON_NEWS"),
    (30, "INMOTION_ENTERTAINMENT"),
    (31, "JACK_IN_THE_BOX"),
    (32, "JAPAN_AIRLINES"),
    (33, "JETBLUE"),
    (34, "LUFTHANSA"),
    (35, "PANDA_EXPRESS"),
    (36, "PANIKKIN_COFFEE_TEA"),
    (37, "PEETS_COFFEE"),
    (38, "PGA_TOUR_GRILL"),
    (39, "PHILS_BBQ"),
    (40, "PRADO_AT_THE_AIRPORT"),
    (41, "QDOBA_MEXICAN_EATS"),
    (42, "RED_MANGO"),
    (43, "RYAN_BROS_COFFEE"),
    (44, "SAFFRON_THAI"),
    (45, "SAN_DIEGO_BAY_WINE_SPIRITS"),
    (46, "SAN_DIEGO_COUNTY_REGIONAL_AIRPORT_AUTHORITY"),
    (47, "SAN_DIEGO_MAGAZINE"),
    (48, "SEES_CANDIES"),
    (49, "SHOE_SHINE_SERVICE"),
    (50, "SOUTHWEST_AIRLINES"),
    (51, "SPIRIT"),
    (52, "STARBUCKS"),
    (53, "STELLAR_NEWS_EXPRESS"),
    (54, "STONE_BREWING"),
    (55, "SUNCOUNTY_AIRLINES"),
    (56, "SUNGLASS_HUT"),
    (57, "TECH_ON_THE_GO"),
    (58, "THE_COUNTER_CUSTOM_BURGERS"),
    (59, "TOMMYVS_PIZZERIA"),
    (60, "TRANSPORTATION_SECURITY_ADMINISTRATION_TSA"),
    (61, "US_CUSTOMS_AND_BORDER_PROTECTION"),
    (62, "UNITED_AIRLINES"),
    (63, "URBAN_CRAVE"),
    (64, "WESTJET"),
    (98, "OTHER_SPECIFY"),
];

pub(crate) const OCCUPATIONS: &[(i64, &str)] = &[
    (1, "AIRCRAFT_MECHANIC"),
    (2, "PILOT"),
    (3, "AIRCRAFT_SVC_ATTENDANT"),
    (4, "AIR_TRAFFIC_CONTROLLER"),
    (5, "FLIGHT_ATTENDANT"),
    (6, "TICKET_AGENT"),
    (7, "CARGO_AGENT"),
    (8, "CARGO_HANDLER"),
    (9, "BLDG_MAINTENANCE_CLEANING"),
    (10, "PARKING_ATTENDANT"),
    (11, "DRIVER"),
    (12, "TSA"),
    (13, "LAW_ENFORCEMENT"),
    (14, "GENERAL_AND_OPERATIONS_MANAGERS"),
    (21, "PROGRAM_AND_PROJECT_MANAGERS"),
    (15, "RETAIL_RESTAURANT"),
    (16, "CONSTRUCTION"),
    (17, "OTHER_LABORERS"),
    (18, "OTHER_CUSTOMER_SUPPORT"),
    (19, "OTHER_ADMIN_SUPPORT"),
    (20, "OTHER_SPECIFY"),
];

pub(crate) const HOURS_WORKED: &[(i64, &str)] = &[
    (1, "ZERO"),
    (2, "ONE_TO_TEN"),
    (3, "ELEVEN_TO_TWENTY"),
    (4, "TWENTY_ONE_TO_THIRTY"),
    (5, "THIRTY_ONE_TO_FORTY"),
    (6, "FORTY_ONE_TO_FIFTY"),
    (7, "FIFTY_ONE_TO_SIXTY"),
    (8, "SIXTY_ONE_TO_SEVENTY"),
    (9, "SEVENTY_ONE_TO_EIGHTY"),
    (10, "MORE_THAN_EIGHTY"),
];

pub(crate) const COMMUTE_DAYS: &[(i64, &str)] = &[
    (1, "ONE"),
    (2, "TWO"),
    (3, "THREE"),
    (4, "FOUR"),
    (5, "FIVE"),
    (6, "SIX"),
    (7, "SEVEN"),
];

pub(crate) const TRAVEL_MODE: &[(i64, &str)] = &[
    (1, "WALK"),
    (2, "WHEELCHAIR_OR_OTHER_MOBILITY_DEVICE"),
    (3, "ELECTRIC_BIKESHARE"),
    (4, "NON_ELECTRIC_BIKESHARE"),
    (5, "E_SCOOTER_SHARE"),
    (5, "PERSONAL_ELECTRIC_BICYCLE"),
    (6, "PERSONAL_NON_ELECTRIC_BICYCLE"),
    (7, "PERSONAL_E_SCOOTER"),
    (8, "TAXI"),
    (9, "UBER_LYFT"),
    (10, "CAR_SERVICE_BLACK_CAR_LIMO_EXECUTIVE_CAR"),
    (11, "DROPPED_OFF_BY_CAR_BY_FRIEND_FAMILY"),
    (12, "DRIVE_ALONE_AND_PARK"),
    (13, "RIDE_WITH_OTHERS_AND_PARK"),
    (14, "PUBLIC_BUS_MTS_992"),
    (15, "AIRPORT_FLYER_OLD_TOWN"),
    (16, "COASTER"),
    (17, "SPRINTER"),
    (18, "PACIFIC_SURFLINER"),
    (19, "MTS_RED_TROLLEY"),
    (20, "PUBLIC_BUS"),
    (21, "OTHER_PUBLIC_TRANSIT"),
    (22, "CHARTERED_BUS_TOUR_BUS"),
    (23, "EMPLOYEE_SHUTTLE"),
    (24, "RENTAL_CAR_AND_DROPPED_IT_OFF_AT_RENTAL_AGENCY"),
    (25, "RENTAL_CAR_AND_PARKED_IT"),
    (26, "HOTEL_SHUTTLE_VAN"),
    (27, "OTHER_SHARED_RIDE_VAN_SERVICE"),
    (98, "OTHER_SPECIFY"),
];

pub(crate) const COMMUTE_MODE_DECISION: &[(i64, &str)] = &[
    (1, "LOWEST_COST"),
    (2, "SHORTEST_DOOR_TO_DOOR_TRAVEL_TIME"),
    (3, "SMALLEST_CHANCE_FOR_DELAYS"),
    (4, "MOST_COMFORTABLE"),
    (5, "LEAST_WALKING"),
    (6, "DEPENDS_ON_TIME_OF_DAY"),
    (7, "DEPENDS_ON_TRAVEL_PARTY"),
    (8, "DEPENDS_ON_WHO_PAYS"),
    (98, "OTHER_SPECIFY"),
];

pub(crate) const REASONS_NO_TRANSIT: &[(i64, &str)] = &[
    (1, "NOT_CONVENIENT"),
    (2, "DISLIKE_CROWDED_TRAINS_BUSES"),
    (3, "NOT_FLEXIBLE"),
    (4, "NOT_RELIABLE"),
    (5, "NOT_SAFE"),
    (6, "TAKES_TOO_LONG"),
    (7, "NOT_ECONOMICAL"),
    (8, "DONT_KNOW_HOW"),
    (9, "TOO_MUCH_WALKING_STAIRS"),
    (10, "NO_GOOD_OPTIONS"),
    (11, "DISLIKE_PUBLIC_TRANSPORT"),
    (12, "DISLIKE_PUBLIC_TRANSPORT_WITH_LUGGAGE"),
    (98, "OTHER_SPECIFY"),
];

pub(crate) const MODE_GROUPED: &[(i64, &str)] = &[
    (1, "WALK"),
    (2, "BIKE_MICROMOBILITY"),
    (3, "TAXI"),
    (4, "TNC"),
    (5, "DROPPED_OFF"),
    (6, "PARKED"),
    (7, "RENTAL_CAR"),
    (8, "TRANSIT"),
    (9, "SHUTTLE"),
    (98, "OTHER"),
];

pub(crate) const ACTIVITY_TYPE: &[(i64, &str)] = &[
    (1, "USUAL_WORKPLACE"),
    (2, "HOME"),
    (3, "HOTEL"),
    (4, "OTHER_BUSINESS"),
    (5, "OTHER_RESIDENCE"),
    (6, "OTHER"),
];

pub(crate) const PARKING_LOCATION: &[(i64, &str)] = &[
    (1, "TERMINAL_PARKING_PLAZA"),
    (2, "ECONOMY_LOT"),
    (3, "OFF_AIRPORT_PRIVATE_LOT"),
    (4, "ON_STREET"),
    (98, "OTHER_SPECIFY"),
];

pub(crate) const PARKING_COST_FREQUENCY: &[(i64, &str)] = &[
    (1, "TOTAL"),
    (2, "MONTHLY"),
    (3, "DAILY"),
    (4, "HOURLY"),
    (98, "OTHER_SPECIFY"),
];

pub(crate) const PARKING_REIMBURSEMENT: &[(i64, &str)] = &[
    (1, "REIMBURSED_EMPLOYER_CLIENT"),
    (2, "REIMBURSED_OTHER_THIRD_PARTY"),
    (3, "NOT_REIMBURSED"),
    (4, "DONT_KNOW"),
];

pub(crate) const SAN_FLIGHT_FREQUENCY: &[(i64, &str)] = &[
    (1, "ONCE_OR_TWICE_PER_YEAR"),
    (2, "THREE_TO_FIVE_PER_YEAR"),
    (3, "SIX_TO_TEN_PER_YEAR"),
    (4, "ELEVEN_TO_TWENTY_PER_YEAR"),
    (5, "TWENTY_ONE_OR_MORE_PER_YEAR"),
    (6, "NEVER"),
];

pub(crate) const TRANSIT_USE_FREQUENCY: &[(i64, &str)] = &[
    (1, "NONE"),
    (2, "ONE_DAY"),
    (3, "TWO_DAYS"),
    (4, "THREE_DAYS"),
    (5, "FOUR_DAYS"),
    (6, "FIVE_DAYS"),
    (7, "SIX_DAYS"),
    (8, "SEVEN_DAYS"),
];

pub(crate) const CAR_AVAILABILITY: &[(i64, &str)] = &[
    (1, "ALWAYS"),
    (2, "SOMETIMES"),
    (3, "NEVER"),
    (4, "DONT_KNOW"),
];

pub(crate) const AGE: &[(i64, &str)] = &[
    (1, "AGE_18_19"),
    (2, "AGE_20_24"),
    (3, "AGE_25_29"),
    (4, "AGE_30_34"),
    (5, "AGE_35_39"),
    (6, "AGE_40_44"),
    (7, "AGE_45_49"),
    (8, "AGE_50_54"),
    (9, "AGE_55_59"),
    (10, "AGE_60_64"),
    (11, "AGE_65_74"),
    (12, "AGE_75_OR_MORE"),
    (99, "PREFER_NOT_TO_SAY"),
];

pub(crate) const GENDER: &[(i64, &str)] = &[
    (1, "FEMALE"),
    (2, "MALE"),
    (3, "TRANSGENDER"),
    (4, "NON_BINARY_THIRD_GENDER"),
    (5, "OTHER_SPECIFY"),
    (99, "PREFER_NOT_TO_SAY"),
];

pub(crate) const HOUSEHOLD_SIZE: &[(i64, &str)] = &[
    (1, "ONE"),
    (2, "TWO"),
    (3, "THREE"),
    (4, "FOUR"),
    (5, "FIVE"),
    (6, "SIX"),
    (7, "SEVEN"),
    (8, "EIGHT"),
    (9, "NINE"),
    (10, "TEN_OR_MORE"),
];

pub(crate) const HOUSEHOLD_VEHICLES: &[(i64, &str)] = &[
    (0, "NONE"),
    (1, "ONE"),
    (2, "TWO"),
    (3, "THREE"),
    (4, "FOUR"),
    (5, "FIVE"),
    (6, "SIX"),
    (7, "SEVEN"),
    (8, "EIGHT_OR_MORE"),
];

pub(crate) const HOUSEHOLD_INCOME: &[(i64, &str)] = &[
    (1, "LESS_THAN_15K"),
    (2, "BETWEEN_15K_20K"),
    (3, "BETWEEN_20K_25K"),
    (4, "BETWEEN_25K_30K"),
    (5, "BETWEEN_30K_35K"),
    (6, "BETWEEN_35K_40K"),
    (7, "BETWEEN_40K_45K"),
    (8, "BETWEEN_45K_50K"),
    (9, "BETWEEN_50K_60K"),
    (10, "BETWEEN_60K_75K"),
    (11, "BETWEEN_75K_100K"),
    (12, "BETWEEN_100K_150K"),
    (13, "ABOVE_150K"),
    (99, "PREFER_NOT_TO_SAY"),
];

pub(crate) const HOUSEHOLD_WORKERS: &[(i64, &str)] = &[
    (0, "NONE"),
    (1, "ONE"),
    (2, "TWO"),
    (3, "THREE"),
    (4, "FOUR"),
    (5, "FIVE"),
    (6, "SIX"),
    (7, "SEVEN"),
    (8, "EIGHT"),
    (9, "NINE"),
    (10, "TEN_OR_MORE"),
];

pub(crate) const ENGLISH_PROFICIENCY: &[(i64, &str)] = &[
    (1, "VERY_WELL"),
    (2, "WELL"),
    (3, "NOT_VERY_WELL"),
    (4, "NOT_AT_ALL"),
];
