//! Bluetooth SIG assigned numbers
//!
//! Declaration, descriptor, service and characteristic UUIDs from the
//! assigned numbers documents. The description table is static data and is
//! never mutated.

pub mod declarations {
    use crate::uuid::Uuid;

    pub const PRIMARY_SERVICE: Uuid = Uuid::from_u16(0x2800);
    pub const SECONDARY_SERVICE: Uuid = Uuid::from_u16(0x2801);
    pub const CHARACTERISTIC: Uuid = Uuid::from_u16(0x2803);
}

pub mod descriptors {
    use crate::uuid::Uuid;

    pub const EXTENDED_PROPERTIES: Uuid = Uuid::from_u16(0x2900);
    pub const USER_DESCRIPTION: Uuid = Uuid::from_u16(0x2901);
    pub const CCCD: Uuid = Uuid::from_u16(0x2902);
    pub const SCCD: Uuid = Uuid::from_u16(0x2903);
    pub const PRESENTATION_FORMAT: Uuid = Uuid::from_u16(0x2904);
    pub const AGGREGATE_FORMAT: Uuid = Uuid::from_u16(0x2905);
    pub const VALID_RANGE: Uuid = Uuid::from_u16(0x2906);
    pub const EXTERNAL_REPORT_REFERENCE: Uuid = Uuid::from_u16(0x2907);
    pub const REPORT_REFERENCE: Uuid = Uuid::from_u16(0x2908);
    pub const NUMBER_OF_DIGITALS: Uuid = Uuid::from_u16(0x2909);
    pub const VALUE_TRIGGER_SETTING: Uuid = Uuid::from_u16(0x290A);
    pub const ES_CONFIGURATION: Uuid = Uuid::from_u16(0x290B);
    pub const ES_MEASUREMENT: Uuid = Uuid::from_u16(0x290C);
    pub const ES_TRIGGER_SETTING: Uuid = Uuid::from_u16(0x290D);
    pub const TIME_TRIGGER_SETTING: Uuid = Uuid::from_u16(0x290E);
}

pub mod services {
    use crate::uuid::Uuid;

    pub const ALERT_NOTIFICATION: Uuid = Uuid::from_u16(0x1811);
    pub const AUTOMATION_IO: Uuid = Uuid::from_u16(0x1815);
    pub const BATTERY_SERVICE: Uuid = Uuid::from_u16(0x180F);
    pub const BINARY_SENSOR: Uuid = Uuid::from_u16(0x183B);
    pub const BLOOD_PRESSURE: Uuid = Uuid::from_u16(0x1810);
    pub const BODY_COMPOSITION: Uuid = Uuid::from_u16(0x181B);
    pub const BOND_MANAGEMENT: Uuid = Uuid::from_u16(0x181E);
    pub const CONTINUOUS_GLUCOSE_MONITORING: Uuid = Uuid::from_u16(0x181F);
    pub const CURRENT_TIME: Uuid = Uuid::from_u16(0x1805);
    pub const CYCLING_POWER: Uuid = Uuid::from_u16(0x1818);
    pub const CYCLING_SPEED_AND_CADENCE: Uuid = Uuid::from_u16(0x1816);
    pub const DEVICE_INFORMATION: Uuid = Uuid::from_u16(0x180A);
    pub const EMERGENCY_CONFIGURATION: Uuid = Uuid::from_u16(0x183C);
    pub const ENVIRONMENTAL_SENSING: Uuid = Uuid::from_u16(0x181A);
    pub const FITNESS_MACHINE: Uuid = Uuid::from_u16(0x1826);
    pub const GENERIC_ACCESS: Uuid = Uuid::from_u16(0x1800);
    pub const GENERIC_ATTRIBUTE: Uuid = Uuid::from_u16(0x1801);
    pub const GLUCOSE: Uuid = Uuid::from_u16(0x1808);
    pub const HEALTH_THERMOMETER: Uuid = Uuid::from_u16(0x1809);
    pub const HEART_RATE: Uuid = Uuid::from_u16(0x180D);
    pub const HTTP_PROXY: Uuid = Uuid::from_u16(0x1823);
    pub const HUMAN_INTERFACE_DEVICE: Uuid = Uuid::from_u16(0x1812);
    pub const IMMEDIATE_ALERT: Uuid = Uuid::from_u16(0x1802);
    pub const INDOOR_POSITIONING: Uuid = Uuid::from_u16(0x1821);
    pub const INSULIN_DELIVERY: Uuid = Uuid::from_u16(0x183A);
    pub const INTERNET_PROTOCOL_SUPPORT: Uuid = Uuid::from_u16(0x1820);
    pub const LINK_LOSS: Uuid = Uuid::from_u16(0x1803);
    pub const LOCATION_AND_NAVIGATION: Uuid = Uuid::from_u16(0x1819);
    pub const MESH_PROVISIONING: Uuid = Uuid::from_u16(0x1827);
    pub const MESH_PROXY: Uuid = Uuid::from_u16(0x1828);
    pub const NEXT_DST_CHANGE: Uuid = Uuid::from_u16(0x1807);
    pub const OBJECT_TRANSFER: Uuid = Uuid::from_u16(0x1825);
    pub const PHONE_ALERT_STATUS: Uuid = Uuid::from_u16(0x180E);
    pub const PULSE_OXIMETER: Uuid = Uuid::from_u16(0x1822);
    pub const RECONNECTION_CONFIGURATION: Uuid = Uuid::from_u16(0x1829);
    pub const REFERENCE_TIME_UPDATE: Uuid = Uuid::from_u16(0x1806);
    pub const RUNNING_SPEED_AND_CADENCE: Uuid = Uuid::from_u16(0x1814);
    pub const SCAN_PARAMETERS: Uuid = Uuid::from_u16(0x1813);
    pub const TRANSPORT_DISCOVERY: Uuid = Uuid::from_u16(0x1824);
    pub const TX_POWER: Uuid = Uuid::from_u16(0x1804);
    pub const USER_DATA: Uuid = Uuid::from_u16(0x181C);
    pub const WEIGHT_SCALE: Uuid = Uuid::from_u16(0x181D);
}

pub mod characteristics {
    use crate::uuid::Uuid;

    pub const AEROBIC_HEART_RATE_LOWER_LIMIT: Uuid = Uuid::from_u16(0x2A7E);
    pub const AEROBIC_HEART_RATE_UPPER_LIMIT: Uuid = Uuid::from_u16(0x2A84);
    pub const AEROBIC_THRESHOLD: Uuid = Uuid::from_u16(0x2A7F);
    pub const AGE: Uuid = Uuid::from_u16(0x2A80);
    pub const AGGREGATE: Uuid = Uuid::from_u16(0x2A5A);
    pub const ALERT_CATEGORY_ID: Uuid = Uuid::from_u16(0x2A43);
    pub const ALERT_CATEGORY_ID_BIT_MASK: Uuid = Uuid::from_u16(0x2A42);
    pub const ALERT_LEVEL: Uuid = Uuid::from_u16(0x2A06);
    pub const ALERT_NOTIFICATION_CONTROL_POINT: Uuid = Uuid::from_u16(0x2A44);
    pub const ALERT_STATUS: Uuid = Uuid::from_u16(0x2A3F);
    pub const ALTITUDE: Uuid = Uuid::from_u16(0x2AB3);
    pub const ANAEROBIC_HEART_RATE_LOWER_LIMIT: Uuid = Uuid::from_u16(0x2A81);
    pub const ANAEROBIC_HEART_RATE_UPPER_LIMIT: Uuid = Uuid::from_u16(0x2A82);
    pub const ANAEROBIC_THRESHOLD: Uuid = Uuid::from_u16(0x2A83);
    pub const ANALOG: Uuid = Uuid::from_u16(0x2A58);
    pub const ANALOG_OUTPUT: Uuid = Uuid::from_u16(0x2A59);
    pub const APPARENT_WIND_DIRECTION: Uuid = Uuid::from_u16(0x2A73);
    pub const APPARENT_WIND_SPEED: Uuid = Uuid::from_u16(0x2A72);
    pub const APPEARANCE: Uuid = Uuid::from_u16(0x2A01);
    pub const BAROMETRIC_PRESSURE_TREND: Uuid = Uuid::from_u16(0x2AA3);
    pub const BATTERY_LEVEL: Uuid = Uuid::from_u16(0x2A19);
    pub const BATTERY_LEVEL_STATE: Uuid = Uuid::from_u16(0x2A1B);
    pub const BATTERY_POWER_STATE: Uuid = Uuid::from_u16(0x2A1A);
    pub const BLOOD_PRESSURE_FEATURE: Uuid = Uuid::from_u16(0x2A49);
    pub const BLOOD_PRESSURE_MEASUREMENT: Uuid = Uuid::from_u16(0x2A35);
    pub const BODY_COMPOSITION_FEATURE: Uuid = Uuid::from_u16(0x2A9B);
    pub const BODY_COMPOSITION_MEASUREMENT: Uuid = Uuid::from_u16(0x2A9C);
    pub const BODY_SENSOR_LOCATION: Uuid = Uuid::from_u16(0x2A38);
    pub const BOND_MANAGEMENT_CONTROL_POINT: Uuid = Uuid::from_u16(0x2AA4);
    pub const BOND_MANAGEMENT_FEATURE: Uuid = Uuid::from_u16(0x2AA5);
    pub const BOOT_KEYBOARD_INPUT_REPORT: Uuid = Uuid::from_u16(0x2A22);
    pub const BOOT_KEYBOARD_OUTPUT_REPORT: Uuid = Uuid::from_u16(0x2A32);
    pub const BOOT_MOUSE_INPUT_REPORT: Uuid = Uuid::from_u16(0x2A33);
    pub const BSS_CONTROL_POINT: Uuid = Uuid::from_u16(0x2B2B);
    pub const BSS_RESPONSE: Uuid = Uuid::from_u16(0x2B2C);
    pub const CENTRAL_ADDRESS_RESOLUTION: Uuid = Uuid::from_u16(0x2AA6);
    pub const CGM_FEATURE: Uuid = Uuid::from_u16(0x2AA8);
    pub const CGM_MEASUREMENT: Uuid = Uuid::from_u16(0x2AA7);
    pub const CGM_SESSION_RUN_TIME: Uuid = Uuid::from_u16(0x2AAB);
    pub const CGM_SESSION_START_TIME: Uuid = Uuid::from_u16(0x2AAA);
    pub const CGM_SPECIFIC_OPS_CONTROL_POINT: Uuid = Uuid::from_u16(0x2AAC);
    pub const CGM_STATUS: Uuid = Uuid::from_u16(0x2AA9);
    pub const CLIENT_SUPPORTED_FEATURES: Uuid = Uuid::from_u16(0x2B29);
    pub const CROSS_TRAINER_DATA: Uuid = Uuid::from_u16(0x2ACE);
    pub const CSC_FEATURE: Uuid = Uuid::from_u16(0x2A5C);
    pub const CSC_MEASUREMENT: Uuid = Uuid::from_u16(0x2A5B);
    pub const CURRENT_TIME: Uuid = Uuid::from_u16(0x2A2B);
    pub const CYCLING_POWER_CONTROL_POINT: Uuid = Uuid::from_u16(0x2A66);
    pub const CYCLING_POWER_FEATURE: Uuid = Uuid::from_u16(0x2A65);
    pub const CYCLING_POWER_MEASUREMENT: Uuid = Uuid::from_u16(0x2A63);
    pub const CYCLING_POWER_VECTOR: Uuid = Uuid::from_u16(0x2A64);
    pub const DATABASE_CHANGE_INCREMENT: Uuid = Uuid::from_u16(0x2A99);
    pub const DATABASE_HASH: Uuid = Uuid::from_u16(0x2B2A);
    pub const DATE_OF_BIRTH: Uuid = Uuid::from_u16(0x2A85);
    pub const DATE_OF_THRESHOLD_ASSESSMENT: Uuid = Uuid::from_u16(0x2A86);
    pub const DATE_TIME: Uuid = Uuid::from_u16(0x2A08);
    pub const DATE_UTC: Uuid = Uuid::from_u16(0x2AED);
    pub const DAY_DATE_TIME: Uuid = Uuid::from_u16(0x2A0A);
    pub const DAY_OF_WEEK: Uuid = Uuid::from_u16(0x2A09);
    pub const DESCRIPTOR_VALUE_CHANGED: Uuid = Uuid::from_u16(0x2A7D);
    pub const DEVICE_NAME: Uuid = Uuid::from_u16(0x2A00);
    pub const DEW_POINT: Uuid = Uuid::from_u16(0x2A7B);
    pub const DIGITAL: Uuid = Uuid::from_u16(0x2A56);
    pub const DIGITAL_OUTPUT: Uuid = Uuid::from_u16(0x2A57);
    pub const DST_OFFSET: Uuid = Uuid::from_u16(0x2A0D);
    pub const ELEVATION: Uuid = Uuid::from_u16(0x2A6C);
    pub const EMAIL_ADDRESS: Uuid = Uuid::from_u16(0x2A87);
    pub const EMERGENCY_ID: Uuid = Uuid::from_u16(0x2B2D);
    pub const EMERGENCY_TEXT: Uuid = Uuid::from_u16(0x2B2E);
    pub const EXACT_TIME_100: Uuid = Uuid::from_u16(0x2A0B);
    pub const EXACT_TIME_256: Uuid = Uuid::from_u16(0x2A0C);
    pub const FAT_BURN_HEART_RATE_LOWER_LIMIT: Uuid = Uuid::from_u16(0x2A88);
    pub const FAT_BURN_HEART_RATE_UPPER_LIMIT: Uuid = Uuid::from_u16(0x2A89);
    pub const FIRMWARE_REVISION_STRING: Uuid = Uuid::from_u16(0x2A26);
    pub const FIRST_NAME: Uuid = Uuid::from_u16(0x2A8A);
    pub const FITNESS_MACHINE_CONTROL_POINT: Uuid = Uuid::from_u16(0x2AD9);
    pub const FITNESS_MACHINE_FEATURE: Uuid = Uuid::from_u16(0x2ACC);
    pub const FITNESS_MACHINE_STATUS: Uuid = Uuid::from_u16(0x2ADA);
    pub const FIVE_ZONE_HEART_RATE_LIMITS: Uuid = Uuid::from_u16(0x2A8B);
    pub const FLOOR_NUMBER: Uuid = Uuid::from_u16(0x2AB2);
    pub const GENDER: Uuid = Uuid::from_u16(0x2A8C);
    pub const GLUCOSE_FEATURE: Uuid = Uuid::from_u16(0x2A51);
    pub const GLUCOSE_MEASUREMENT: Uuid = Uuid::from_u16(0x2A18);
    pub const GLUCOSE_MEASUREMENT_CONTEXT: Uuid = Uuid::from_u16(0x2A34);
    pub const GUST_FACTOR: Uuid = Uuid::from_u16(0x2A74);
    pub const HARDWARE_REVISION_STRING: Uuid = Uuid::from_u16(0x2A27);
    pub const HEART_RATE_CONTROL_POINT: Uuid = Uuid::from_u16(0x2A39);
    pub const HEART_RATE_MAX: Uuid = Uuid::from_u16(0x2A8D);
    pub const HEART_RATE_MEASUREMENT: Uuid = Uuid::from_u16(0x2A37);
    pub const HEAT_INDEX: Uuid = Uuid::from_u16(0x2A7A);
    pub const HEIGHT: Uuid = Uuid::from_u16(0x2A8E);
    pub const HID_CONTROL_POINT: Uuid = Uuid::from_u16(0x2A4C);
    pub const HID_INFORMATION: Uuid = Uuid::from_u16(0x2A4A);
    pub const HIP_CIRCUMFERENCE: Uuid = Uuid::from_u16(0x2A8F);
    pub const HTTP_CONTROL_POINT: Uuid = Uuid::from_u16(0x2ABA);
    pub const HTTP_ENTITY_BODY: Uuid = Uuid::from_u16(0x2AB9);
    pub const HTTP_HEADERS: Uuid = Uuid::from_u16(0x2AB7);
    pub const HTTP_STATUS_CODE: Uuid = Uuid::from_u16(0x2AB8);
    pub const HTTPS_SECURITY: Uuid = Uuid::from_u16(0x2ABB);
    pub const HUMIDITY: Uuid = Uuid::from_u16(0x2A6F);
    pub const IDD_ANNUNCIATION_STATUS: Uuid = Uuid::from_u16(0x2B22);
    pub const IDD_COMMAND_CONTROL_POINT: Uuid = Uuid::from_u16(0x2B25);
    pub const IDD_COMMAND_DATA: Uuid = Uuid::from_u16(0x2B26);
    pub const IDD_FEATURES: Uuid = Uuid::from_u16(0x2B23);
    pub const IDD_HISTORY_DATA: Uuid = Uuid::from_u16(0x2B28);
    pub const IDD_RECORD_ACCESS_CONTROL_POINT: Uuid = Uuid::from_u16(0x2B27);
    pub const IDD_STATUS: Uuid = Uuid::from_u16(0x2B21);
    pub const IDD_STATUS_CHANGED: Uuid = Uuid::from_u16(0x2B20);
    pub const IDD_STATUS_READER_CONTROL_POINT: Uuid = Uuid::from_u16(0x2B24);
    pub const IEEE11073_20601_REGULATORY_CERTIFICATION_DATA_LIST: Uuid = Uuid::from_u16(0x2A2A);
    pub const INDOOR_BIKE_DATA: Uuid = Uuid::from_u16(0x2AD2);
    pub const INDOOR_POSITIONING_CONFIGURATION: Uuid = Uuid::from_u16(0x2AAD);
    pub const INTERMEDIATE_CUFF_PRESSURE: Uuid = Uuid::from_u16(0x2A36);
    pub const INTERMEDIATE_TEMPERATURE: Uuid = Uuid::from_u16(0x2A1E);
    pub const IRRADIANCE: Uuid = Uuid::from_u16(0x2A77);
    pub const LANGUAGE: Uuid = Uuid::from_u16(0x2AA2);
    pub const LAST_NAME: Uuid = Uuid::from_u16(0x2A90);
    pub const LATITUDE: Uuid = Uuid::from_u16(0x2AAE);
    pub const LN_CONTROL_POINT: Uuid = Uuid::from_u16(0x2A6B);
    pub const LN_FEATURE: Uuid = Uuid::from_u16(0x2A6A);
    pub const LOCAL_EAST_COORDINATE: Uuid = Uuid::from_u16(0x2AB1);
    pub const LOCAL_NORTH_COORDINATE: Uuid = Uuid::from_u16(0x2AB0);
    pub const LOCAL_TIME_INFORMATION: Uuid = Uuid::from_u16(0x2A0F);
    pub const LOCATION_AND_SPEED: Uuid = Uuid::from_u16(0x2A67);
    pub const LOCATION_NAME: Uuid = Uuid::from_u16(0x2AB5);
    pub const LONGITUDE: Uuid = Uuid::from_u16(0x2AAF);
    pub const MAGNETIC_DECLINATION: Uuid = Uuid::from_u16(0x2A2C);
    pub const MAGNETIC_FLUX_DENSITY_2D: Uuid = Uuid::from_u16(0x2AA0);
    pub const MAGNETIC_FLUX_DENSITY_3D: Uuid = Uuid::from_u16(0x2AA1);
    pub const MANUFACTURER_NAME_STRING: Uuid = Uuid::from_u16(0x2A29);
    pub const MAXIMUM_RECOMMENDED_HEART_RATE: Uuid = Uuid::from_u16(0x2A91);
    pub const MEASUREMENT_INTERVAL: Uuid = Uuid::from_u16(0x2A21);
    pub const MESH_PROVISIONING_DATA_IN: Uuid = Uuid::from_u16(0x2ADB);
    pub const MESH_PROVISIONING_DATA_OUT: Uuid = Uuid::from_u16(0x2ADC);
    pub const MESH_PROXY_DATA_IN: Uuid = Uuid::from_u16(0x2ADD);
    pub const MESH_PROXY_DATA_OUT: Uuid = Uuid::from_u16(0x2ADE);
    pub const MODEL_NUMBER_STRING: Uuid = Uuid::from_u16(0x2A24);
    pub const NAVIGATION: Uuid = Uuid::from_u16(0x2A68);
    pub const NETWORK_AVAILABILITY: Uuid = Uuid::from_u16(0x2A3E);
    pub const NEW_ALERT: Uuid = Uuid::from_u16(0x2A46);
    pub const OBJECT_ACTION_CONTROL_POINT: Uuid = Uuid::from_u16(0x2AC5);
    pub const OBJECT_CHANGED: Uuid = Uuid::from_u16(0x2AC8);
    pub const OBJECT_FIRST_CREATED: Uuid = Uuid::from_u16(0x2AC1);
    pub const OBJECT_ID: Uuid = Uuid::from_u16(0x2AC3);
    pub const OBJECT_LAST_MODIFIED: Uuid = Uuid::from_u16(0x2AC2);
    pub const OBJECT_LIST_CONTROL_POINT: Uuid = Uuid::from_u16(0x2AC6);
    pub const OBJECT_LIST_FILTER: Uuid = Uuid::from_u16(0x2AC7);
    pub const OBJECT_NAME: Uuid = Uuid::from_u16(0x2ABE);
    pub const OBJECT_PROPERTIES: Uuid = Uuid::from_u16(0x2AC4);
    pub const OBJECT_SIZE: Uuid = Uuid::from_u16(0x2AC0);
    pub const OBJECT_TYPE: Uuid = Uuid::from_u16(0x2ABF);
    pub const OTS_FEATURE: Uuid = Uuid::from_u16(0x2ABD);
    pub const PERIPHERAL_PREFERRED_CONNECTION_PARAMETERS: Uuid = Uuid::from_u16(0x2A04);
    pub const PERIPHERAL_PRIVACY_FLAG: Uuid = Uuid::from_u16(0x2A02);
    pub const PLX_CONTINUOUS_MEASUREMENT: Uuid = Uuid::from_u16(0x2A5F);
    pub const PLX_FEATURES: Uuid = Uuid::from_u16(0x2A60);
    pub const PLX_SPOT_CHECK_MEASUREMENT: Uuid = Uuid::from_u16(0x2A5E);
    pub const PNP_ID: Uuid = Uuid::from_u16(0x2A50);
    pub const POLLEN_CONCENTRATION: Uuid = Uuid::from_u16(0x2A75);
    pub const POSITION_2D: Uuid = Uuid::from_u16(0x2A2F);
    pub const POSITION_3D: Uuid = Uuid::from_u16(0x2A30);
    pub const POSITION_QUALITY: Uuid = Uuid::from_u16(0x2A69);
    pub const PRESSURE: Uuid = Uuid::from_u16(0x2A6D);
    pub const PROTOCOL_MODE: Uuid = Uuid::from_u16(0x2A4E);
    pub const PULSE_OXIMETRY_CONTROL_POINT: Uuid = Uuid::from_u16(0x2A62);
    pub const RAINFALL: Uuid = Uuid::from_u16(0x2A78);
    pub const RC_FEATURE: Uuid = Uuid::from_u16(0x2B1D);
    pub const RC_SETTINGS: Uuid = Uuid::from_u16(0x2B1E);
    pub const RECONNECTION_ADDRESS: Uuid = Uuid::from_u16(0x2A03);
    pub const RECONNECTION_CONFIGURATION_CONTROL_POINT: Uuid = Uuid::from_u16(0x2B1F);
    pub const RECORD_ACCESS_CONTROL_POINT: Uuid = Uuid::from_u16(0x2A52);
    pub const REFERENCE_TIME_INFORMATION: Uuid = Uuid::from_u16(0x2A14);
    pub const REGISTERED_USER_CHARACTERISTIC: Uuid = Uuid::from_u16(0x2B37);
    pub const REMOVABLE: Uuid = Uuid::from_u16(0x2A3A);
    pub const REPORT: Uuid = Uuid::from_u16(0x2A4D);
    pub const REPORT_MAP: Uuid = Uuid::from_u16(0x2A4B);
    pub const RESOLVABLE_PRIVATE_ADDRESS_ONLY: Uuid = Uuid::from_u16(0x2AC9);
    pub const RESTING_HEART_RATE: Uuid = Uuid::from_u16(0x2A92);
    pub const RINGER_CONTROL_POINT: Uuid = Uuid::from_u16(0x2A40);
    pub const RINGER_SETTING: Uuid = Uuid::from_u16(0x2A41);
    pub const ROWER_DATA: Uuid = Uuid::from_u16(0x2AD1);
    pub const RSC_FEATURE: Uuid = Uuid::from_u16(0x2A54);
    pub const RSC_MEASUREMENT: Uuid = Uuid::from_u16(0x2A53);
    pub const SC_CONTROL_POINT: Uuid = Uuid::from_u16(0x2A55);
    pub const SCAN_INTERVAL_WINDOW: Uuid = Uuid::from_u16(0x2A4F);
    pub const SCAN_REFRESH: Uuid = Uuid::from_u16(0x2A31);
    pub const SCIENTIFIC_TEMPERATURE_CELSIUS: Uuid = Uuid::from_u16(0x2A3C);
    pub const SECONDARY_TIME_ZONE: Uuid = Uuid::from_u16(0x2A10);
    pub const SENSOR_LOCATION: Uuid = Uuid::from_u16(0x2A5D);
    pub const SERIAL_NUMBER_STRING: Uuid = Uuid::from_u16(0x2A25);
    pub const SERVER_SUPPORTED_FEATURES: Uuid = Uuid::from_u16(0x2B3A);
    pub const SERVICE_CHANGED: Uuid = Uuid::from_u16(0x2A05);
    pub const SERVICE_REQUIRED: Uuid = Uuid::from_u16(0x2A3B);
    pub const SOFTWARE_REVISION_STRING: Uuid = Uuid::from_u16(0x2A28);
    pub const SPORT_TYPE_FOR_AEROBIC_AND_ANAEROBIC_THRESHOLDS: Uuid = Uuid::from_u16(0x2A93);
    pub const STAIR_CLIMBER_DATA: Uuid = Uuid::from_u16(0x2AD0);
    pub const STEP_CLIMBER_DATA: Uuid = Uuid::from_u16(0x2ACF);
    pub const STRING: Uuid = Uuid::from_u16(0x2A3D);
    pub const SUPPORTED_HEART_RATE_RANGE: Uuid = Uuid::from_u16(0x2AD7);
    pub const SUPPORTED_INCLINATION_RANGE: Uuid = Uuid::from_u16(0x2AD5);
    pub const SUPPORTED_NEW_ALERT_CATEGORY: Uuid = Uuid::from_u16(0x2A47);
    pub const SUPPORTED_POWER_RANGE: Uuid = Uuid::from_u16(0x2AD8);
    pub const SUPPORTED_RESISTANCE_LEVEL_RANGE: Uuid = Uuid::from_u16(0x2AD6);
    pub const SUPPORTED_SPEED_RANGE: Uuid = Uuid::from_u16(0x2AD4);
    pub const SUPPORTED_UNREAD_ALERT_CATEGORY: Uuid = Uuid::from_u16(0x2A48);
    pub const SYSTEM_ID: Uuid = Uuid::from_u16(0x2A23);
    pub const TDS_CONTROL_POINT: Uuid = Uuid::from_u16(0x2ABC);
    pub const TEMPERATURE: Uuid = Uuid::from_u16(0x2A6E);
    pub const TEMPERATURE_CELSIUS: Uuid = Uuid::from_u16(0x2A1F);
    pub const TEMPERATURE_FAHRENHEIT: Uuid = Uuid::from_u16(0x2A20);
    pub const TEMPERATURE_MEASUREMENT: Uuid = Uuid::from_u16(0x2A1C);
    pub const TEMPERATURE_TYPE: Uuid = Uuid::from_u16(0x2A1D);
    pub const THREE_ZONE_HEART_RATE_LIMITS: Uuid = Uuid::from_u16(0x2A94);
    pub const TIME_ACCURACY: Uuid = Uuid::from_u16(0x2A12);
    pub const TIME_BROADCAST: Uuid = Uuid::from_u16(0x2A15);
    pub const TIME_SOURCE: Uuid = Uuid::from_u16(0x2A13);
    pub const TIME_UPDATE_CONTROL_POINT: Uuid = Uuid::from_u16(0x2A16);
    pub const TIME_UPDATE_STATE: Uuid = Uuid::from_u16(0x2A17);
    pub const TIME_WITH_DST: Uuid = Uuid::from_u16(0x2A11);
    pub const TIME_ZONE: Uuid = Uuid::from_u16(0x2A0E);
    pub const TRAINING_STATUS: Uuid = Uuid::from_u16(0x2AD3);
    pub const TREADMILL_DATA: Uuid = Uuid::from_u16(0x2ACD);
    pub const TRUE_WIND_DIRECTION: Uuid = Uuid::from_u16(0x2A71);
    pub const TRUE_WIND_SPEED: Uuid = Uuid::from_u16(0x2A70);
    pub const TWO_ZONE_HEART_RATE_LIMIT: Uuid = Uuid::from_u16(0x2A95);
    pub const TX_POWER_LEVEL: Uuid = Uuid::from_u16(0x2A07);
    pub const UNCERTAINTY: Uuid = Uuid::from_u16(0x2AB4);
    pub const UNREAD_ALERT_STATUS: Uuid = Uuid::from_u16(0x2A45);
    pub const URI: Uuid = Uuid::from_u16(0x2AB6);
    pub const USER_CONTROL_POINT: Uuid = Uuid::from_u16(0x2A9F);
    pub const USER_INDEX: Uuid = Uuid::from_u16(0x2A9A);
    pub const UV_INDEX: Uuid = Uuid::from_u16(0x2A76);
    pub const VO2_MAX: Uuid = Uuid::from_u16(0x2A96);
    pub const WAIST_CIRCUMFERENCE: Uuid = Uuid::from_u16(0x2A97);
    pub const WEIGHT: Uuid = Uuid::from_u16(0x2A98);
    pub const WEIGHT_MEASUREMENT: Uuid = Uuid::from_u16(0x2A9D);
    pub const WEIGHT_SCALE_FEATURE: Uuid = Uuid::from_u16(0x2A9E);
    pub const WIND_CHILL: Uuid = Uuid::from_u16(0x2A79);
}

/// Sorted by assigned number for binary search
static DESCRIPTIONS: &[(u16, &str)] = &[
    (0x1800, "Generic Access"),
    (0x1801, "Generic Attribute"),
    (0x1802, "Immediate Alert"),
    (0x1803, "Link Loss"),
    (0x1804, "Tx Power"),
    (0x1805, "Current Time"),
    (0x1806, "Reference Time Update"),
    (0x1807, "Next Dst Change"),
    (0x1808, "Glucose"),
    (0x1809, "Health Thermometer"),
    (0x180A, "Device Information"),
    (0x180D, "Heart Rate"),
    (0x180E, "Phone Alert Status"),
    (0x180F, "Battery Service"),
    (0x1810, "Blood Pressure"),
    (0x1811, "Alert Notification"),
    (0x1812, "Human Interface Device"),
    (0x1813, "Scan Parameters"),
    (0x1814, "Running Speed And Cadence"),
    (0x1815, "Automation Io"),
    (0x1816, "Cycling Speed And Cadence"),
    (0x1818, "Cycling Power"),
    (0x1819, "Location And Navigation"),
    (0x181A, "Environmental Sensing"),
    (0x181B, "Body Composition"),
    (0x181C, "User Data"),
    (0x181D, "Weight Scale"),
    (0x181E, "Bond Management"),
    (0x181F, "Continuous Glucose Monitoring"),
    (0x1820, "Internet Protocol Support"),
    (0x1821, "Indoor Positioning"),
    (0x1822, "Pulse Oximeter"),
    (0x1823, "Http Proxy"),
    (0x1824, "Transport Discovery"),
    (0x1825, "Object Transfer"),
    (0x1826, "Fitness Machine"),
    (0x1827, "Mesh Provisioning"),
    (0x1828, "Mesh Proxy"),
    (0x1829, "Reconnection Configuration"),
    (0x183A, "Insulin Delivery"),
    (0x183B, "Binary Sensor"),
    (0x183C, "Emergency Configuration"),
    (0x2800, "Primary Service"),
    (0x2801, "Secondary Service"),
    (0x2803, "Characteristic Declaration"),
    (0x2900, "Extended Properties"),
    (0x2901, "User Description"),
    (0x2902, "Client Characteristic Configuration Descriptor"),
    (0x2903, "Server Characteristic Configuration Descriptor"),
    (0x2904, "Presentation Format"),
    (0x2905, "Aggregate Format"),
    (0x2906, "Valid Range"),
    (0x2907, "External Report Reference"),
    (0x2908, "Report Reference"),
    (0x2909, "Number Of Digitals"),
    (0x290A, "Value Trigger Setting"),
    (0x290B, "Es Configuration"),
    (0x290C, "Es Measurement"),
    (0x290D, "Es Trigger Setting"),
    (0x290E, "Time Trigger Setting"),
    (0x2A00, "Device Name"),
    (0x2A01, "Appearance"),
    (0x2A02, "Peripheral Privacy Flag"),
    (0x2A03, "Reconnection Address"),
    (0x2A04, "Peripheral Preferred Connection Parameters"),
    (0x2A05, "Service Changed"),
    (0x2A06, "Alert Level"),
    (0x2A07, "Tx Power Level"),
    (0x2A08, "Date Time"),
    (0x2A09, "Day Of Week"),
    (0x2A0A, "Day Date Time"),
    (0x2A0B, "Exact Time 100"),
    (0x2A0C, "Exact Time 256"),
    (0x2A0D, "Dst Offset"),
    (0x2A0E, "Time Zone"),
    (0x2A0F, "Local Time Information"),
    (0x2A10, "Secondary Time Zone"),
    (0x2A11, "Time With Dst"),
    (0x2A12, "Time Accuracy"),
    (0x2A13, "Time Source"),
    (0x2A14, "Reference Time Information"),
    (0x2A15, "Time Broadcast"),
    (0x2A16, "Time Update Control Point"),
    (0x2A17, "Time Update State"),
    (0x2A18, "Glucose Measurement"),
    (0x2A19, "Battery Level"),
    (0x2A1A, "Battery Power State"),
    (0x2A1B, "Battery Level State"),
    (0x2A1C, "Temperature Measurement"),
    (0x2A1D, "Temperature Type"),
    (0x2A1E, "Intermediate Temperature"),
    (0x2A1F, "Temperature Celsius"),
    (0x2A20, "Temperature Fahrenheit"),
    (0x2A21, "Measurement Interval"),
    (0x2A22, "Boot Keyboard Input Report"),
    (0x2A23, "System Id"),
    (0x2A24, "Model Number String"),
    (0x2A25, "Serial Number String"),
    (0x2A26, "Firmware Revision String"),
    (0x2A27, "Hardware Revision String"),
    (0x2A28, "Software Revision String"),
    (0x2A29, "Manufacturer Name String"),
    (0x2A2A, "Ieee11073 20601 Regulatory Certification Data List"),
    (0x2A2B, "Current Time"),
    (0x2A2C, "Magnetic Declination"),
    (0x2A2F, "Position 2d"),
    (0x2A30, "Position 3d"),
    (0x2A31, "Scan Refresh"),
    (0x2A32, "Boot Keyboard Output Report"),
    (0x2A33, "Boot Mouse Input Report"),
    (0x2A34, "Glucose Measurement Context"),
    (0x2A35, "Blood Pressure Measurement"),
    (0x2A36, "Intermediate Cuff Pressure"),
    (0x2A37, "Heart Rate Measurement"),
    (0x2A38, "Body Sensor Location"),
    (0x2A39, "Heart Rate Control Point"),
    (0x2A3A, "Removable"),
    (0x2A3B, "Service Required"),
    (0x2A3C, "Scientific Temperature Celsius"),
    (0x2A3D, "String"),
    (0x2A3E, "Network Availability"),
    (0x2A3F, "Alert Status"),
    (0x2A40, "Ringer Control Point"),
    (0x2A41, "Ringer Setting"),
    (0x2A42, "Alert Category Id Bit Mask"),
    (0x2A43, "Alert Category Id"),
    (0x2A44, "Alert Notification Control Point"),
    (0x2A45, "Unread Alert Status"),
    (0x2A46, "New Alert"),
    (0x2A47, "Supported New Alert Category"),
    (0x2A48, "Supported Unread Alert Category"),
    (0x2A49, "Blood Pressure Feature"),
    (0x2A4A, "Hid Information"),
    (0x2A4B, "Report Map"),
    (0x2A4C, "Hid Control Point"),
    (0x2A4D, "Report"),
    (0x2A4E, "Protocol Mode"),
    (0x2A4F, "Scan Interval Window"),
    (0x2A50, "Pnp Id"),
    (0x2A51, "Glucose Feature"),
    (0x2A52, "Record Access Control Point"),
    (0x2A53, "Rsc Measurement"),
    (0x2A54, "Rsc Feature"),
    (0x2A55, "Sc Control Point"),
    (0x2A56, "Digital"),
    (0x2A57, "Digital Output"),
    (0x2A58, "Analog"),
    (0x2A59, "Analog Output"),
    (0x2A5A, "Aggregate"),
    (0x2A5B, "Csc Measurement"),
    (0x2A5C, "Csc Feature"),
    (0x2A5D, "Sensor Location"),
    (0x2A5E, "Plx Spot Check Measurement"),
    (0x2A5F, "Plx Continuous Measurement"),
    (0x2A60, "Plx Features"),
    (0x2A62, "Pulse Oximetry Control Point"),
    (0x2A63, "Cycling Power Measurement"),
    (0x2A64, "Cycling Power Vector"),
    (0x2A65, "Cycling Power Feature"),
    (0x2A66, "Cycling Power Control Point"),
    (0x2A67, "Location And Speed"),
    (0x2A68, "Navigation"),
    (0x2A69, "Position Quality"),
    (0x2A6A, "Ln Feature"),
    (0x2A6B, "Ln Control Point"),
    (0x2A6C, "Elevation"),
    (0x2A6D, "Pressure"),
    (0x2A6E, "Temperature"),
    (0x2A6F, "Humidity"),
    (0x2A70, "True Wind Speed"),
    (0x2A71, "True Wind Direction"),
    (0x2A72, "Apparent Wind Speed"),
    (0x2A73, "Apparent Wind Direction"),
    (0x2A74, "Gust Factor"),
    (0x2A75, "Pollen Concentration"),
    (0x2A76, "Uv Index"),
    (0x2A77, "Irradiance"),
    (0x2A78, "Rainfall"),
    (0x2A79, "Wind Chill"),
    (0x2A7A, "Heat Index"),
    (0x2A7B, "Dew Point"),
    (0x2A7D, "Descriptor Value Changed"),
    (0x2A7E, "Aerobic Heart Rate Lower Limit"),
    (0x2A7F, "Aerobic Threshold"),
    (0x2A80, "Age"),
    (0x2A81, "Anaerobic Heart Rate Lower Limit"),
    (0x2A82, "Anaerobic Heart Rate Upper Limit"),
    (0x2A83, "Anaerobic Threshold"),
    (0x2A84, "Aerobic Heart Rate Upper Limit"),
    (0x2A85, "Date Of Birth"),
    (0x2A86, "Date Of Threshold Assessment"),
    (0x2A87, "Email Address"),
    (0x2A88, "Fat Burn Heart Rate Lower Limit"),
    (0x2A89, "Fat Burn Heart Rate Upper Limit"),
    (0x2A8A, "First Name"),
    (0x2A8B, "Five Zone Heart Rate Limits"),
    (0x2A8C, "Gender"),
    (0x2A8D, "Heart Rate Max"),
    (0x2A8E, "Height"),
    (0x2A8F, "Hip Circumference"),
    (0x2A90, "Last Name"),
    (0x2A91, "Maximum Recommended Heart Rate"),
    (0x2A92, "Resting Heart Rate"),
    (0x2A93, "Sport Type For Aerobic And Anaerobic Thresholds"),
    (0x2A94, "Three Zone Heart Rate Limits"),
    (0x2A95, "Two Zone Heart Rate Limit"),
    (0x2A96, "Vo2 Max"),
    (0x2A97, "Waist Circumference"),
    (0x2A98, "Weight"),
    (0x2A99, "Database Change Increment"),
    (0x2A9A, "User Index"),
    (0x2A9B, "Body Composition Feature"),
    (0x2A9C, "Body Composition Measurement"),
    (0x2A9D, "Weight Measurement"),
    (0x2A9E, "Weight Scale Feature"),
    (0x2A9F, "User Control Point"),
    (0x2AA0, "Magnetic Flux Density 2d"),
    (0x2AA1, "Magnetic Flux Density 3d"),
    (0x2AA2, "Language"),
    (0x2AA3, "Barometric Pressure Trend"),
    (0x2AA4, "Bond Management Control Point"),
    (0x2AA5, "Bond Management Feature"),
    (0x2AA6, "Central Address Resolution"),
    (0x2AA7, "Cgm Measurement"),
    (0x2AA8, "Cgm Feature"),
    (0x2AA9, "Cgm Status"),
    (0x2AAA, "Cgm Session Start Time"),
    (0x2AAB, "Cgm Session Run Time"),
    (0x2AAC, "Cgm Specific Ops Control Point"),
    (0x2AAD, "Indoor Positioning Configuration"),
    (0x2AAE, "Latitude"),
    (0x2AAF, "Longitude"),
    (0x2AB0, "Local North Coordinate"),
    (0x2AB1, "Local East Coordinate"),
    (0x2AB2, "Floor Number"),
    (0x2AB3, "Altitude"),
    (0x2AB4, "Uncertainty"),
    (0x2AB5, "Location Name"),
    (0x2AB6, "Uri"),
    (0x2AB7, "Http Headers"),
    (0x2AB8, "Http Status Code"),
    (0x2AB9, "Http Entity Body"),
    (0x2ABA, "Http Control Point"),
    (0x2ABB, "Https Security"),
    (0x2ABC, "Tds Control Point"),
    (0x2ABD, "Ots Feature"),
    (0x2ABE, "Object Name"),
    (0x2ABF, "Object Type"),
    (0x2AC0, "Object Size"),
    (0x2AC1, "Object First Created"),
    (0x2AC2, "Object Last Modified"),
    (0x2AC3, "Object Id"),
    (0x2AC4, "Object Properties"),
    (0x2AC5, "Object Action Control Point"),
    (0x2AC6, "Object List Control Point"),
    (0x2AC7, "Object List Filter"),
    (0x2AC8, "Object Changed"),
    (0x2AC9, "Resolvable Private Address Only"),
    (0x2ACC, "Fitness Machine Feature"),
    (0x2ACD, "Treadmill Data"),
    (0x2ACE, "Cross Trainer Data"),
    (0x2ACF, "Step Climber Data"),
    (0x2AD0, "Stair Climber Data"),
    (0x2AD1, "Rower Data"),
    (0x2AD2, "Indoor Bike Data"),
    (0x2AD3, "Training Status"),
    (0x2AD4, "Supported Speed Range"),
    (0x2AD5, "Supported Inclination Range"),
    (0x2AD6, "Supported Resistance Level Range"),
    (0x2AD7, "Supported Heart Rate Range"),
    (0x2AD8, "Supported Power Range"),
    (0x2AD9, "Fitness Machine Control Point"),
    (0x2ADA, "Fitness Machine Status"),
    (0x2ADB, "Mesh Provisioning Data In"),
    (0x2ADC, "Mesh Provisioning Data Out"),
    (0x2ADD, "Mesh Proxy Data In"),
    (0x2ADE, "Mesh Proxy Data Out"),
    (0x2AED, "Date Utc"),
    (0x2B1D, "Rc Feature"),
    (0x2B1E, "Rc Settings"),
    (0x2B1F, "Reconnection Configuration Control Point"),
    (0x2B20, "Idd Status Changed"),
    (0x2B21, "Idd Status"),
    (0x2B22, "Idd Annunciation Status"),
    (0x2B23, "Idd Features"),
    (0x2B24, "Idd Status Reader Control Point"),
    (0x2B25, "Idd Command Control Point"),
    (0x2B26, "Idd Command Data"),
    (0x2B27, "Idd Record Access Control Point"),
    (0x2B28, "Idd History Data"),
    (0x2B29, "Client Supported Features"),
    (0x2B2A, "Database Hash"),
    (0x2B2B, "Bss Control Point"),
    (0x2B2C, "Bss Response"),
    (0x2B2D, "Emergency Id"),
    (0x2B2E, "Emergency Text"),
    (0x2B37, "Registered User Characteristic"),
    (0x2B3A, "Server Supported Features"),
];

pub(crate) fn lookup(short: u16) -> Option<&'static str> {
    DESCRIPTIONS
        .binary_search_by_key(&short, |(value, _)| *value)
        .ok()
        .map(|index| DESCRIPTIONS[index].1)
}
