//! DIAG-1: diagnostic and system health reporting (registry id 0x05).

use super::entry;
use crate::codebook::domain::{DomainCodebook, DomainEntry};

/// The DIAG-1 codebook.
pub static DIAG1: DomainCodebook =
    DomainCodebook::new(0x05, "DIAG-1", "Diagnostic and system health reporting", ENTRIES);

static ENTRIES: &[DomainEntry] = &[
    // Power and energy (0x0000-0x001F)
    entry(0x0000, "BATTERY_LEVEL", "FLOAT16", "%", "Battery state of charge 0-100%"),
    entry(0x0001, "BATTERY_VOLTAGE", "FLOAT16", "V", "Battery terminal voltage"),
    entry(0x0002, "BATTERY_CURRENT", "FLOAT16", "A", "Battery discharge current"),
    entry(0x0003, "BATTERY_TEMP", "FLOAT16", "K", "Battery temperature"),
    entry(0x0004, "CHARGE_RATE", "FLOAT16", "W", "Current charge rate"),
    entry(0x0005, "TIME_REMAINING", "FLOAT32", "s", "Estimated runtime remaining"),
    entry(0x0006, "POWER_CONSUMPTION", "FLOAT16", "W", "Current total power draw"),
    entry(0x0007, "ENERGY_CONSUMED", "FLOAT32", "J", "Total energy consumed this session"),
    entry(0x0008, "CHARGING_STATUS", "UINT8", "", "0=discharging, 1=charging, 2=full, 3=fault"),
    entry(0x0009, "POWER_SOURCE", "UINT8", "", "0=battery, 1=wired, 2=solar, 3=fuel_cell"),
    // Compute and memory (0x0020-0x003F)
    entry(0x0020, "CPU_LOAD", "FLOAT16", "%", "CPU utilization 0-100%"),
    entry(0x0021, "GPU_LOAD", "FLOAT16", "%", "GPU utilization 0-100%"),
    entry(0x0022, "MEMORY_USED", "UINT32", "KB", "Memory in use"),
    entry(0x0023, "MEMORY_TOTAL", "UINT32", "KB", "Total available memory"),
    entry(0x0024, "STORAGE_USED", "UINT32", "KB", "Storage in use"),
    entry(0x0025, "STORAGE_TOTAL", "UINT32", "KB", "Total available storage"),
    entry(0x0026, "CPU_TEMP", "FLOAT16", "K", "CPU temperature"),
    entry(0x0027, "GPU_TEMP", "FLOAT16", "K", "GPU temperature"),
    entry(0x0028, "INFERENCE_RATE", "FLOAT32", "Hz", "AI model inference rate"),
    entry(0x0029, "MODEL_ID", "STRING", "", "Active AI model identifier"),
    // Communication health (0x0040-0x005F)
    entry(0x0040, "AILL_SNR", "FLOAT16", "dB", "Current AILL channel SNR"),
    entry(0x0041, "AILL_BER", "FLOAT32", "", "Current AILL bit error rate"),
    entry(0x0042, "AILL_THROUGHPUT", "FLOAT32", "bps", "Current effective data rate"),
    entry(0x0043, "AILL_RETRANSMITS", "UINT16", "", "Retransmission count this session"),
    entry(0x0044, "AILL_LATENCY", "FLOAT16", "ms", "Round-trip latency estimate"),
    entry(0x0045, "WIFI_RSSI", "INT8", "dBm", "WiFi signal strength"),
    entry(0x0046, "NETWORK_STATUS", "UINT8", "", "0=disconnected, 1=connected, 2=limited"),
    // System status (0x0060-0x007F)
    entry(0x0060, "UPTIME", "UINT32", "s", "System uptime in seconds"),
    entry(0x0061, "BOOT_COUNT", "UINT16", "", "Number of system boots"),
    entry(0x0062, "ERROR_COUNT", "UINT16", "", "Cumulative error count"),
    entry(0x0063, "LAST_ERROR", "STRUCT{code,msg,ts}", "", "Most recent error record"),
    entry(0x0064, "HEALTH_STATUS", "UINT8", "", "0=nominal, 1=degraded, 2=critical, 3=emergency"),
    entry(0x0065, "FIRMWARE_VERSION", "STRING", "", "Firmware/software version string"),
    entry(0x0066, "HARDWARE_ID", "STRING", "", "Hardware model identifier"),
    entry(0x0067, "CAPABILITIES_REPORT", "STRUCT", "", "Full capability self-report"),
    entry(0x0068, "SELF_TEST_RESULT", "STRUCT{pass,details}", "", "Built-in self-test results"),
    entry(0x0069, "MAINTENANCE_DUE", "TIMESTAMP", "", "Next scheduled maintenance time"),
    entry(0x006A, "OPERATING_MODE", "UINT8", "", "0=idle, 1=active, 2=standby, 3=safe_mode, 4=shutdown"),
    entry(0x006B, "ACTUATOR_STATUS", "LIST<STRUCT{id,ok,temp}>", "", "Per-actuator health"),
    // Thermal management (0x0080-0x0097)
    entry(0x0080, "THERMAL_MAP", "LIST<STRUCT{zone,temp}>", "K", "Temperature readings by zone"),
    entry(0x0081, "HOT_SPOT", "STRUCT{zone,temp,trend}", "", "Thermal hot spot alert"),
    entry(0x0082, "COOLING_STATUS", "UINT8", "", "0=passive, 1=fan_low, 2=fan_high, 3=liquid, 4=emergency_shutdown"),
    entry(0x0083, "THERMAL_THROTTLE", "BOOL", "", "True if performance is thermally throttled"),
    entry(0x0084, "AMBIENT_TEMP", "FLOAT16", "K", "External ambient temperature"),
    entry(0x0085, "INTERNAL_TEMP", "FLOAT16", "K", "Internal chassis temperature"),
    entry(0x0086, "MOTOR_TEMP", "STRUCT{id,temp}", "K", "Per-motor temperature reading"),
    entry(0x0087, "HEATER_STATUS", "STRUCT{id,on,power}", "", "Heater element status"),
    // Actuator detail (0x0098-0x00AF)
    entry(0x0098, "MOTOR_CURRENT", "STRUCT{id,amps}", "A", "Per-motor current draw"),
    entry(0x0099, "MOTOR_RPM", "STRUCT{id,rpm}", "rpm", "Per-motor rotational speed"),
    entry(0x009A, "MOTOR_POSITION", "STRUCT{id,angle}", "rad", "Per-motor shaft position"),
    entry(0x009B, "MOTOR_FAULT", "STRUCT{id,code}", "", "Motor fault: 0=ok, 1=overcurrent, 2=overheat, 3=stall, 4=encoder_fail, 5=comm_fail"),
    entry(0x009C, "SERVO_POSITION", "STRUCT{id,actual,target}", "rad", "Servo actual vs target position"),
    entry(0x009D, "SERVO_LOAD", "STRUCT{id,load_pct}", "%", "Servo load as percent of max"),
    entry(0x009E, "HYDRAULIC_PRESSURE", "STRUCT{id,pressure}", "Pa", "Hydraulic system pressure"),
    entry(0x009F, "PNEUMATIC_PRESSURE", "STRUCT{id,pressure}", "Pa", "Pneumatic system pressure"),
    entry(0x00A0, "BRAKE_STATUS", "STRUCT{id,engaged}", "", "Brake engagement status"),
    entry(0x00A1, "CLUTCH_STATUS", "STRUCT{id,engaged}", "", "Clutch engagement status"),
    entry(0x00A2, "JOINT_TORQUE", "STRUCT{id,torque}", "Nm", "Measured joint torque"),
    entry(0x00A3, "JOINT_BACKLASH", "STRUCT{id,angle}", "rad", "Measured joint backlash"),
    entry(0x00A4, "WEAR_INDICATOR", "STRUCT{component,pct}", "%", "Component wear level percentage"),
    // Software and AI diagnostics (0x00B0-0x00CF)
    entry(0x00B0, "PROCESS_LIST", "LIST<STRUCT{pid,name,cpu,mem}>", "", "Running processes"),
    entry(0x00B1, "THREAD_COUNT", "UINT16", "", "Active thread count"),
    entry(0x00B2, "QUEUE_DEPTH", "STRUCT{name,depth}", "", "Message queue occupancy"),
    entry(0x00B3, "LATENCY_HIST", "LIST<STRUCT{bucket_ms,count}>", "", "Latency histogram for processing pipeline"),
    entry(0x00B4, "MODEL_CONFIDENCE", "FLOAT16", "", "Current AI model output confidence"),
    entry(0x00B5, "MODEL_LATENCY", "FLOAT16", "ms", "AI model inference latency"),
    entry(0x00B6, "PERCEPTION_FPS", "FLOAT16", "Hz", "Perception pipeline frame rate"),
    entry(0x00B7, "PLANNING_CYCLE", "FLOAT16", "ms", "Planning loop cycle time"),
    entry(0x00B8, "CONTROL_CYCLE", "FLOAT16", "ms", "Control loop cycle time"),
    entry(0x00B9, "WATCHDOG_STATUS", "UINT8", "", "0=ok, 1=warning, 2=tripped"),
    entry(0x00BA, "LOG_ENTRY", "STRUCT{level,source,msg}", "", "Diagnostic log entry"),
    entry(0x00BB, "LOG_LEVEL", "UINT8", "", "0=trace, 1=debug, 2=info, 3=warn, 4=error, 5=fatal"),
    entry(0x00BC, "CRASH_REPORT", "STRUCT{time,module,backtrace}", "", "Software crash report"),
    entry(0x00BD, "PARAM_VALUE", "STRUCT{name,value}", "", "Runtime configuration parameter"),
    entry(0x00BE, "PARAM_SET", "STRUCT{name,value}", "", "Request to change runtime parameter"),
    entry(0x00BF, "PARAM_ACK", "STRUCT{name,ok}", "", "Acknowledge parameter change"),
    // Lifecycle and fleet (0x00D0-0x00DF)
    entry(0x00D0, "FLIGHT_HOURS", "FLOAT32", "h", "Total operational flight/run hours"),
    entry(0x00D1, "CYCLE_COUNT", "UINT32", "", "Total motor/actuator power cycles"),
    entry(0x00D2, "LAST_CALIBRATION", "TIMESTAMP", "", "Timestamp of last sensor calibration"),
    entry(0x00D3, "CALIBRATION_DUE", "TIMESTAMP", "", "Next required calibration"),
    entry(0x00D4, "REPLACEMENT_PART", "STRUCT{part_id,urgency}", "", "Part approaching end of life"),
    entry(0x00D5, "FLEET_ID", "STRING", "", "Fleet assignment identifier"),
    entry(0x00D6, "DEPLOYMENT_ID", "STRING", "", "Current deployment/mission identifier"),
    entry(0x00D7, "OTA_STATUS", "UINT8", "", "Over-the-air update: 0=none, 1=available, 2=downloading, 3=ready, 4=applying, 5=failed"),
    entry(0x00D8, "OTA_VERSION", "STRING", "", "Available OTA update version string"),
    entry(0x00D9, "STORAGE_HEALTH", "UINT8", "%", "Storage medium health (SSD wear level)"),
];
