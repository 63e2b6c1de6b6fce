//! SAFETY-1: safety, emergency, and regulatory compliance (registry id 0x07).

use super::entry;
use crate::codebook::domain::{DomainCodebook, DomainEntry};

/// The SAFETY-1 codebook.
pub static SAFETY1: DomainCodebook = DomainCodebook::new(
    0x07,
    "SAFETY-1",
    "Safety, emergency, and regulatory compliance",
    ENTRIES,
);

static ENTRIES: &[DomainEntry] = &[
    // Emergency levels and alerts (0x0000-0x001F)
    entry(0x0000, "EMERGENCY_LEVEL", "UINT8", "", "0=clear, 1=caution, 2=warning, 3=danger, 4=critical, 5=catastrophic"),
    entry(0x0001, "EMERGENCY_TYPE", "UINT8", "", "0=collision, 1=fire, 2=flood, 3=structural, 4=chemical, 5=electrical, 6=medical, 7=security, 8=loss_of_control"),
    entry(0x0002, "EMERGENCY_DECLARE", "STRUCT{level,type,pos,desc}", "", "Declare emergency with location and description"),
    entry(0x0003, "EMERGENCY_CLEAR", "STRUCT{type}", "", "Declare emergency condition resolved"),
    entry(0x0004, "MAYDAY", "STRUCT{agent,pos,nature}", "", "Distress call: agent in immediate danger"),
    entry(0x0005, "PAN_PAN", "STRUCT{agent,pos,nature}", "", "Urgency call: agent needs assistance"),
    entry(0x0006, "ALL_STOP", "NONE", "", "Immediate halt command to all agents"),
    entry(0x0007, "RESUME_OPERATIONS", "NONE", "", "Resume normal operations after all-stop"),
    entry(0x0008, "EVACUATION_ORDER", "STRUCT{zone,rally_point}", "", "Order to evacuate zone to rally point"),
    entry(0x0009, "SHELTER_IN_PLACE", "STRUCT{zone,duration}", "", "Order to hold position and wait"),
    entry(0x000A, "DISTRESS_BEACON", "STRUCT{uuid,pos,ts}", "", "Periodic emergency beacon until rescued/resolved"),
    // Human safety (0x0020-0x003F)
    entry(0x0020, "HUMAN_DETECTED", "STRUCT{pos,distance,conf}", "", "Human presence detected near agent"),
    entry(0x0021, "HUMAN_PROXIMITY", "FLOAT32", "m", "Distance to nearest detected human"),
    entry(0x0022, "HUMAN_IN_WORKSPACE", "BOOL", "", "Human has entered robot workspace"),
    entry(0x0023, "SAFETY_ZONE", "UINT8", "", "0=safe (>2m), 1=warning (1-2m), 2=protective (<1m), 3=danger (<0.5m)"),
    entry(0x0024, "SPEED_LIMIT", "FLOAT32", "m/s", "Current speed limit for human safety"),
    entry(0x0025, "FORCE_LIMIT", "FLOAT32", "N", "Current force limit for human safety"),
    entry(0x0026, "PROTECTIVE_STOP", "STRUCT{reason,pos}", "", "Safety-rated protective stop engaged"),
    entry(0x0027, "SAFETY_STOP_CLEAR", "NONE", "", "Protective stop condition resolved"),
    entry(0x0028, "PERSON_TRACKING", "LIST<STRUCT{id,pos,vel}>", "", "All tracked persons with trajectories"),
    entry(0x0029, "PERSON_PREDICTED", "STRUCT{id,pred_pos,horizon}", "", "Predicted person position at time horizon"),
    entry(0x002A, "COLLABORATIVE_MODE", "UINT8", "", "0=separated, 1=coexistence, 2=cooperation, 3=collaboration (ISO 10218)"),
    entry(0x002B, "SAFETY_RATED_SPEED", "FLOAT32", "m/s", "Safety-rated monitored speed (ISO/TS 15066)"),
    entry(0x002C, "POWER_FORCE_LIMIT", "STRUCT{body_part,max_force}", "N", "ISO/TS 15066 per-body-part force limits"),
    // Fault and failure (0x0040-0x005F)
    entry(0x0040, "FAULT_DETECTED", "STRUCT{system,code,severity}", "", "System fault detected"),
    entry(0x0041, "FAULT_CLEARED", "STRUCT{system,code}", "", "Fault condition resolved"),
    entry(0x0042, "FAILSAFE_ACTIVE", "STRUCT{type}", "", "Failsafe mode engaged: 0=soft_stop, 1=safe_park, 2=return_home, 3=power_off, 4=controlled_descent"),
    entry(0x0043, "REDUNDANCY_STATUS", "STRUCT{system,primary,backup}", "", "Redundant system health"),
    entry(0x0044, "WATCHDOG_TRIP", "STRUCT{module,last_seen}", "", "Watchdog timer expired for module"),
    entry(0x0045, "COMM_LOST", "STRUCT{agent,duration}", "", "Communication lost with agent"),
    entry(0x0046, "COMM_RESTORED", "STRUCT{agent}", "", "Communication restored with agent"),
    entry(0x0047, "GPS_LOST", "NONE", "", "GPS signal lost"),
    entry(0x0048, "GPS_RESTORED", "STRUCT{accuracy}", "m", "GPS signal restored with accuracy"),
    entry(0x0049, "SENSOR_FAULT", "STRUCT{sensor_id,type}", "", "Sensor fault: 0=degraded, 1=failed, 2=inconsistent, 3=stuck"),
    entry(0x004A, "ACTUATOR_FAULT", "STRUCT{actuator_id,type}", "", "Actuator fault: 0=degraded, 1=locked, 2=runaway, 3=disconnected"),
    entry(0x004B, "POWER_FAULT", "STRUCT{type,details}", "", "Power system fault: 0=brownout, 1=overcurrent, 2=cell_imbalance, 3=thermal_runaway"),
    entry(0x004C, "ESTOP_PRESSED", "STRUCT{agent,source}", "", "Emergency stop button activated"),
    entry(0x004D, "ESTOP_RELEASED", "STRUCT{agent}", "", "Emergency stop button released"),
    // Geofence and regulatory (0x0060-0x007F)
    entry(0x0060, "GEOFENCE_BREACH", "STRUCT{fence_id,pos}", "", "Agent has breached geofence boundary"),
    entry(0x0061, "ALTITUDE_LIMIT", "FLOAT32", "m", "Maximum permitted altitude"),
    entry(0x0062, "ALTITUDE_BREACH", "STRUCT{current,limit}", "m", "Agent exceeds altitude limit"),
    entry(0x0063, "SPEED_BREACH", "STRUCT{current,limit}", "m/s", "Agent exceeds speed limit"),
    entry(0x0064, "RESTRICTED_ZONE", "STRUCT{id,polygon,floor,ceiling}", "", "Defined restricted zone"),
    entry(0x0065, "ZONE_ENTERED", "STRUCT{zone_id}", "", "Agent entered restricted zone"),
    entry(0x0066, "ZONE_EXITED", "STRUCT{zone_id}", "", "Agent exited restricted zone"),
    entry(0x0067, "FLIGHT_AUTH", "STRUCT{area,start,end,auth_id}", "", "Regulatory flight authorization"),
    entry(0x0068, "REMOTE_ID", "STRUCT{uuid,pos,alt,vel,pilot_pos}", "", "Remote identification broadcast (FAA compliance)"),
    entry(0x0069, "NOISE_LIMIT", "FLOAT16", "dB_SPL", "Maximum permitted noise level"),
    entry(0x006A, "OPERATING_HOURS", "STRUCT{start,end}", "", "Permitted operating time window"),
    entry(0x006B, "WEATHER_LIMIT", "STRUCT{max_wind,min_vis,max_rain}", "", "Weather operating limits"),
    entry(0x006C, "WEATHER_ABORT", "STRUCT{condition}", "", "Weather exceeds operating limits"),
    // Safety monitoring (0x0080-0x0097)
    entry(0x0080, "SAFETY_SCORE", "FLOAT16", "", "Overall safety score 0.0-1.0"),
    entry(0x0081, "RISK_ASSESSMENT", "STRUCT{hazard,probability,severity}", "", "Risk assessment for hazard"),
    entry(0x0082, "MITIGATION_ACTIVE", "STRUCT{risk_id,measure}", "", "Active risk mitigation measure"),
    entry(0x0083, "SAFETY_LOG", "STRUCT{event,ts,details}", "", "Safety event log entry"),
    entry(0x0084, "NEAR_MISS", "STRUCT{type,agents,min_dist}", "", "Near-miss incident report"),
    entry(0x0085, "INCIDENT_REPORT", "STRUCT{type,agents,pos,ts,desc}", "", "Post-incident report"),
    entry(0x0086, "SAFE_LANDING_SITES", "LIST<STRUCT{pos,quality}>", "", "Available emergency landing sites"),
    entry(0x0087, "ESCAPE_ROUTE", "LIST<POSITION_3D>", "", "Planned escape route from current position"),
    entry(0x0088, "BATTERY_RESERVE", "FLOAT16", "%", "Battery reserved for safe return"),
    entry(0x0089, "POINT_OF_NO_RETURN", "STRUCT{pos,time}", "", "Must-decide point for safe return"),
    entry(0x008A, "CONTINGENCY_PLAN", "STRUCT{trigger,action}", "", "If-trigger-then-action safety plan"),
    entry(0x008B, "BLACK_BOX_MARK", "STRUCT{event,ts}", "", "Mark event in flight recorder / black box"),
];
