//! NAV-1: navigation and spatial positioning (registry id 0x01).

use super::entry;
use crate::codebook::domain::{DomainCodebook, DomainEntry};

/// The NAV-1 codebook.
pub static NAV1: DomainCodebook =
    DomainCodebook::new(0x01, "NAV-1", "Navigation and spatial positioning", ENTRIES);

static ENTRIES: &[DomainEntry] = &[
    // Coordinate and pose (0x0000-0x002F)
    entry(0x0000, "POSITION_3D", "ARRAY<FLOAT32,3>", "m", "3D position (x, y, z)"),
    entry(0x0001, "POSITION_2D", "ARRAY<FLOAT32,2>", "m", "2D position (x, y)"),
    entry(0x0002, "HEADING", "FLOAT32", "rad", "Heading angle from North"),
    entry(0x0003, "ORIENTATION_QUAT", "ARRAY<FLOAT32,4>", "", "Quaternion (w, x, y, z)"),
    entry(0x0004, "ORIENTATION_EULER", "ARRAY<FLOAT32,3>", "rad", "Euler angles (roll, pitch, yaw)"),
    entry(0x0005, "VELOCITY_3D", "ARRAY<FLOAT32,3>", "m/s", "Linear velocity vector"),
    entry(0x0006, "VELOCITY_SCALAR", "FLOAT32", "m/s", "Scalar speed"),
    entry(0x0007, "ANGULAR_VEL", "ARRAY<FLOAT32,3>", "rad/s", "Angular velocity"),
    entry(0x0008, "ACCELERATION_3D", "ARRAY<FLOAT32,3>", "m/s^2", "Linear acceleration"),
    entry(0x0009, "POSE_6DOF", "STRUCT{pos,orient}", "", "Full 6DOF pose"),
    entry(0x000A, "LATITUDE", "FLOAT64", "deg", "WGS84 latitude"),
    entry(0x000B, "LONGITUDE", "FLOAT64", "deg", "WGS84 longitude"),
    entry(0x000C, "ALTITUDE_MSL", "FLOAT32", "m", "Altitude above mean sea level"),
    entry(0x000D, "ALTITUDE_AGL", "FLOAT32", "m", "Altitude above ground level"),
    entry(0x000E, "GPS_FIX", "STRUCT", "", "Complete GPS fix record"),
    entry(0x000F, "COORDINATE_FRAME", "UINT8", "", "Coord frame ID"),
    // Waypoint and path (0x0030-0x005F)
    entry(0x0030, "WAYPOINT", "STRUCT{id,pos,rad}", "", "Named waypoint"),
    entry(0x0031, "WAYPOINT_ID", "UINT16", "", "Waypoint identifier"),
    entry(0x0032, "PATH", "LIST<WAYPOINT>", "", "Ordered waypoint sequence"),
    entry(0x0033, "PATH_SEGMENT", "STRUCT", "", "Segment with curvature"),
    entry(0x0034, "CURRENT_WAYPOINT", "UINT16", "", "Current target waypoint index"),
    entry(0x0035, "DISTANCE_TO_WP", "FLOAT32", "m", "Distance to current waypoint"),
    entry(0x0036, "ETA", "FLOAT32", "s", "Estimated time of arrival"),
    entry(0x0037, "PATH_COMPLETE", "BOOL", "", "Path completion flag"),
    entry(0x0038, "PATH_DEVIATION", "FLOAT32", "m", "Cross-track error"),
    entry(0x0039, "GEOFENCE", "LIST<POSITION_2D>", "", "Restricted area polygon"),
    entry(0x003A, "GEOFENCE_STATUS", "UINT8", "", "Geofence relation status"),
    entry(0x003B, "HOME_POSITION", "POSITION_3D", "m", "Designated home position"),
    // Obstacle and environment (0x0060-0x008F)
    entry(0x0060, "OBSTACLE", "STRUCT", "", "Detected obstacle"),
    entry(0x0061, "OBSTACLE_TYPE", "UINT8", "", "Obstacle classification"),
    entry(0x0062, "OBSTACLE_SIZE", "ARRAY<FLOAT32,3>", "m", "Bounding box dimensions"),
    entry(0x0063, "OBSTACLE_LIST", "LIST<OBSTACLE>", "", "Collection of obstacles"),
    entry(0x0064, "CLEARANCE", "FLOAT32", "m", "Min clearance to nearest obstacle"),
    entry(0x0065, "COLLISION_RISK", "FLOAT16", "", "Collision probability 0.0-1.0"),
    entry(0x0066, "TERRAIN_TYPE", "UINT8", "", "Surface type code"),
    entry(0x0067, "SLOPE_ANGLE", "FLOAT16", "rad", "Ground slope"),
    entry(0x0068, "VISIBILITY", "FLOAT32", "m", "Visibility range"),
    entry(0x0069, "OCCUPANCY_GRID", "STRUCT", "", "2D occupancy grid map"),
    // Motion commands (0x0090-0x00BF)
    entry(0x0090, "GOTO", "POSITION_3D", "m", "Navigate to position"),
    entry(0x0091, "GOTO_WAYPOINT", "UINT16", "", "Navigate to waypoint ID"),
    entry(0x0092, "FOLLOW_PATH", "PATH", "", "Execute path"),
    entry(0x0093, "STOP", "NONE", "", "Halt all movement"),
    entry(0x0094, "HOLD_POSITION", "NONE", "", "Station-keeping"),
    entry(0x0095, "SET_VELOCITY", "VELOCITY_3D", "m/s", "Set desired velocity"),
    entry(0x0096, "SET_HEADING", "FLOAT32", "rad", "Turn to heading"),
    entry(0x0097, "ORBIT", "STRUCT", "", "Orbit a point"),
    entry(0x0098, "FOLLOW_AGENT", "STRUCT{uuid,dist}", "", "Follow another agent"),
    entry(0x0099, "RETURN_HOME", "NONE", "", "Navigate to home"),
    entry(0x009A, "AVOID", "STRUCT{pos,radius}", "", "Add exclusion zone"),
    entry(0x009B, "FORMATION", "STRUCT{type,slot}", "", "Join formation"),
    // Mapping and localization (0x00C0-0x00EF)
    entry(0x00C0, "MAP_ORIGIN", "POSITION_3D", "m", "Origin of the local map frame"),
    entry(0x00C1, "MAP_RESOLUTION", "FLOAT32", "m", "Grid cell size"),
    entry(0x00C2, "MAP_DIMENSIONS", "ARRAY<UINT16,3>", "", "Grid dimensions (nx, ny, nz)"),
    entry(0x00C3, "MAP_UPDATE", "STRUCT{region,cells}", "", "Incremental map patch"),
    entry(0x00C4, "MAP_VERSION", "UINT32", "", "Map revision counter"),
    entry(0x00C5, "LOCALIZATION_CONF", "FLOAT16", "", "Localization confidence 0.0-1.0"),
    entry(0x00C6, "POSE_COVARIANCE", "ARRAY<FLOAT32,36>", "", "6x6 pose uncertainty covariance matrix"),
    entry(0x00C7, "LANDMARK", "STRUCT{id,pos,desc}", "", "Recognized environmental landmark"),
    entry(0x00C8, "LANDMARK_LIST", "LIST<LANDMARK>", "", "Collection of observed landmarks"),
    entry(0x00C9, "LOOP_CLOSURE", "STRUCT{from,to,tf}", "", "Loop closure detection with transform"),
    entry(0x00CA, "RELOCALIZE", "NONE", "", "Trigger relocalization procedure"),
    entry(0x00CB, "LOCALIZATION_MODE", "UINT8", "", "0=SLAM, 1=known_map, 2=GPS_primary, 3=visual_odom, 4=dead_reckoning"),
    entry(0x00CC, "ODOMETRY_DRIFT", "FLOAT32", "m", "Estimated cumulative drift from odometry"),
    entry(0x00CD, "VISUAL_FEATURES", "UINT16", "", "Number of tracked visual features"),
    entry(0x00CE, "MAP_MERGE_REQ", "STRUCT{agent,hash}", "", "Request to merge map from another agent"),
    entry(0x00CF, "MAP_MERGE_ACK", "STRUCT{agent,tf}", "", "Acknowledge merge with alignment transform"),
    // Coordinate transforms (0x00F0-0x010F)
    entry(0x00F0, "TRANSFORM_3D", "STRUCT{rot,trans}", "", "Rigid body transform (rotation matrix + translation)"),
    entry(0x00F1, "TRANSFORM_QUAT", "STRUCT{quat,trans}", "", "Quaternion-based rigid body transform"),
    entry(0x00F2, "FRAME_PARENT", "UINT8", "", "Parent frame ID in transform tree"),
    entry(0x00F3, "FRAME_CHILD", "UINT8", "", "Child frame ID in transform tree"),
    entry(0x00F4, "TF_TREE", "LIST<STRUCT{parent,child,tf}>", "", "Complete transform tree snapshot"),
    entry(0x00F5, "TF_LOOKUP", "STRUCT{from,to}", "", "Request transform between two frames"),
    entry(0x00F6, "TF_RESULT", "TRANSFORM_QUAT", "", "Result of a transform lookup"),
    entry(0x00F7, "DATUM_WGS84", "STRUCT{lat,lon,alt}", "", "WGS84 datum point for local frame"),
    entry(0x00F8, "UTM_ZONE", "STRUCT{zone,band}", "", "UTM zone number and latitude band"),
    entry(0x00F9, "MAGNETIC_DECLINATION", "FLOAT16", "rad", "Local magnetic declination"),
    // Multi-agent spatial coordination (0x0110-0x013F)
    entry(0x0110, "SWARM_CENTER", "POSITION_3D", "m", "Centroid of all agents in swarm"),
    entry(0x0111, "SWARM_RADIUS", "FLOAT32", "m", "Bounding radius of swarm"),
    entry(0x0112, "AGENT_POSITIONS", "LIST<STRUCT{uuid,pos}>", "", "Positions of all known agents"),
    entry(0x0113, "SEPARATION_DIST", "FLOAT32", "m", "Minimum inter-agent separation distance"),
    entry(0x0114, "COLLISION_ALERT", "STRUCT{agent,ttc}", "", "Inter-agent collision alert with time-to-collision"),
    entry(0x0115, "ZONE_CLAIM", "STRUCT{agent,polygon}", "", "Agent claims exclusive operating zone"),
    entry(0x0116, "ZONE_RELEASE", "STRUCT{agent,zone_id}", "", "Agent releases zone claim"),
    entry(0x0117, "RENDEZVOUS_POINT", "STRUCT{pos,time}", "", "Designated meeting point with time"),
    entry(0x0118, "CONVOY_JOIN", "STRUCT{leader,pos,slot}", "", "Join a convoy behind specified leader"),
    entry(0x0119, "CONVOY_LEAVE", "NONE", "", "Depart from current convoy"),
    entry(0x011A, "COVERAGE_MAP", "STRUCT{grid,visited}", "", "Coverage completion map for area search"),
    entry(0x011B, "ASSIGN_SECTOR", "STRUCT{agent,polygon}", "", "Assign search sector to agent"),
    entry(0x011C, "SECTOR_COMPLETE", "STRUCT{agent,sector_id}", "", "Report sector search complete"),
    entry(0x011D, "RELATIVE_BEARING", "STRUCT{agent,bearing,range}", "", "Bearing and range to another agent"),
    entry(0x011E, "FORMATION_OFFSET", "STRUCT{slot,offset}", "", "Position offset within formation for assigned slot"),
    entry(0x011F, "TRAFFIC_DECONFLICT", "STRUCT{agent,corridor}", "", "Corridor assignment for traffic deconfliction"),
    // Advanced path planning (0x0140-0x015F)
    entry(0x0140, "SPLINE_PATH", "STRUCT{ctrl_pts,order}", "", "Spline-based smooth path (control points + order)"),
    entry(0x0141, "DUBINS_PATH", "STRUCT{start,end,radius}", "", "Dubins path for non-holonomic vehicles"),
    entry(0x0142, "VELOCITY_PROFILE", "LIST<STRUCT{dist,vel}>", "", "Speed profile along path"),
    entry(0x0143, "ALTITUDE_PROFILE", "LIST<STRUCT{dist,alt}>", "", "Altitude profile along path"),
    entry(0x0144, "NO_FLY_ZONE", "STRUCT{polygon,floor,ceiling}", "", "3D restricted airspace volume"),
    entry(0x0145, "DYNAMIC_OBSTACLE", "STRUCT{id,pos,vel,pred_path}", "", "Obstacle with predicted trajectory"),
    entry(0x0146, "REPLAN_TRIGGER", "UINT8", "", "0=obstacle, 1=path_blocked, 2=priority_change, 3=battery_low, 4=weather"),
    entry(0x0147, "SEARCH_PATTERN", "UINT8", "", "0=lawnmower, 1=spiral, 2=sector, 3=random_walk, 4=levy_flight"),
    entry(0x0148, "LOITER", "STRUCT{center,radius,alt,duration}", "", "Loiter (circle) at location for duration"),
    entry(0x0149, "LANDING_ZONE", "STRUCT{pos,heading,slope,clear}", "", "Designated landing area with surface info"),
    entry(0x014A, "TAKEOFF", "STRUCT{alt}", "", "Takeoff to specified altitude"),
    entry(0x014B, "LAND", "STRUCT{zone_id}", "", "Land at designated landing zone"),
];
