//! PERCEPT-1: visual and sensor perception (registry id 0x02).

use super::entry;
use crate::codebook::domain::{DomainCodebook, DomainEntry};

/// The PERCEPT-1 codebook.
pub static PERCEPT1: DomainCodebook =
    DomainCodebook::new(0x02, "PERCEPT-1", "Visual and sensor perception", ENTRIES);

static ENTRIES: &[DomainEntry] = &[
    // Object detection (0x0000-0x002F)
    entry(0x0000, "DETECTED_OBJECT", "STRUCT", "", "Detected object with properties"),
    entry(0x0001, "OBJECT_CLASS", "UINT16", "", "Object class from taxonomy"),
    entry(0x0002, "OBJECT_CONFIDENCE", "FLOAT16", "", "Detection confidence 0.0-1.0"),
    entry(0x0003, "BOUNDING_BOX_2D", "ARRAY<FLOAT32,4>", "px", "2D bbox (x, y, width, height)"),
    entry(0x0004, "BOUNDING_BOX_3D", "STRUCT", "m", "3D bbox (center, dimensions, orientation)"),
    entry(0x0005, "OBJECT_POSITION", "ARRAY<FLOAT32,3>", "m", "Object centroid in 3D"),
    entry(0x0006, "OBJECT_VELOCITY", "ARRAY<FLOAT32,3>", "m/s", "Object velocity estimate"),
    entry(0x0007, "OBJECT_ID", "UINT32", "", "Tracking ID (persistent across frames)"),
    entry(0x0008, "OBJECT_LIST", "LIST<DETECTED_OBJECT>", "", "Collection of detections"),
    entry(0x0009, "SEGMENTATION_MASK", "BYTES", "", "Run-length encoded pixel mask"),
    entry(0x000A, "KEYPOINT", "ARRAY<FLOAT32,3>", "px", "2D keypoint (x, y, confidence)"),
    entry(0x000B, "KEYPOINT_SET", "LIST<KEYPOINT>", "", "Named set of keypoints (skeleton)"),
    entry(0x000C, "OBJECT_LABEL", "STRING", "", "Human-readable label"),
    // Spatial relations (0x0030-0x004F)
    entry(0x0030, "ABOVE", "NONE", "", "Spatial: A is above B"),
    entry(0x0031, "BELOW", "NONE", "", "Spatial: A is below B"),
    entry(0x0032, "LEFT_OF", "NONE", "", "Spatial: A is left of B"),
    entry(0x0033, "RIGHT_OF", "NONE", "", "Spatial: A is right of B"),
    entry(0x0034, "IN_FRONT_OF", "NONE", "", "Spatial: A is in front of B"),
    entry(0x0035, "BEHIND", "NONE", "", "Spatial: A is behind B"),
    entry(0x0036, "INSIDE", "NONE", "", "Spatial: A is inside B"),
    entry(0x0037, "OUTSIDE", "NONE", "", "Spatial: A is outside B"),
    entry(0x0038, "ADJACENT", "NONE", "", "Spatial: A is adjacent to B"),
    entry(0x0039, "FAR_FROM", "NONE", "", "Spatial: A is far from B"),
    entry(0x003A, "NEAR", "NONE", "", "Spatial: A is near B"),
    entry(0x003B, "ON_TOP_OF", "NONE", "", "Spatial: A is resting on B"),
    entry(0x003C, "ATTACHED_TO", "NONE", "", "Spatial: A is physically attached to B"),
    // Visual properties (0x0050-0x006F)
    entry(0x0050, "COLOR_RGB", "ARRAY<UINT8,3>", "", "Color as (R, G, B)"),
    entry(0x0051, "COLOR_NAME", "UINT8", "", "Named color index"),
    entry(0x0052, "TEXTURE", "UINT8", "", "Texture class (smooth, rough, etc.)"),
    entry(0x0053, "MATERIAL", "UINT8", "", "Material class (metal, wood, etc.)"),
    entry(0x0054, "SHAPE", "UINT8", "", "Shape class (sphere, cube, etc.)"),
    entry(0x0055, "SIZE_RELATIVE", "UINT8", "", "Relative size (tiny, small, medium, large, huge)"),
    entry(0x0056, "BRIGHTNESS", "FLOAT16", "lux", "Measured brightness"),
    entry(0x0057, "TRANSPARENCY", "FLOAT16", "", "Transparency 0.0-1.0"),
    // Sensor data (0x0070-0x008F)
    entry(0x0070, "LIDAR_SCAN", "LIST<ARRAY<FLOAT32,3>>", "m", "Point cloud from LiDAR"),
    entry(0x0071, "DEPTH_MAP", "STRUCT{w,h,data}", "m", "Depth image"),
    entry(0x0072, "CAMERA_INTRINSICS", "STRUCT", "", "Camera calibration matrix"),
    entry(0x0073, "CAMERA_EXTRINSICS", "STRUCT", "", "Camera pose"),
    entry(0x0074, "IMAGE_EMBEDDING", "ARRAY<FLOAT16,N>", "", "Feature embedding vector"),
    entry(0x0075, "AUDIO_LEVEL", "FLOAT16", "dB", "Ambient audio level"),
    entry(0x0076, "TEMPERATURE", "FLOAT16", "K", "Measured temperature"),
    entry(0x0077, "HUMIDITY", "FLOAT16", "%", "Relative humidity"),
    entry(0x0078, "PRESSURE", "FLOAT32", "Pa", "Atmospheric pressure"),
    entry(0x0079, "IMU_DATA", "STRUCT{accel,gyro,mag}", "", "Inertial measurement unit"),
    // Scene understanding (0x0090-0x00AF)
    entry(0x0090, "SCENE_GRAPH", "LIST<STRUCT{subj,rel,obj}>", "", "Scene graph: subject-relation-object triples"),
    entry(0x0091, "ROOM_TYPE", "UINT8", "", "0=unknown, 1=corridor, 2=room, 3=outdoor, 4=stairwell, 5=elevator, 6=garage, 7=warehouse"),
    entry(0x0092, "FLOOR_LEVEL", "INT8", "", "Building floor number (-N for basement)"),
    entry(0x0093, "SURFACE_NORMAL", "ARRAY<FLOAT32,3>", "", "Dominant surface normal vector"),
    entry(0x0094, "PLANE_SEGMENT", "STRUCT{normal,d,bounds}", "", "Detected planar surface segment"),
    entry(0x0095, "PLANE_LIST", "LIST<PLANE_SEGMENT>", "", "All detected planar surfaces"),
    entry(0x0096, "SEMANTIC_LABEL", "STRUCT{region,class,conf}", "", "Semantic segmentation label for a region"),
    entry(0x0097, "SCENE_COMPLEXITY", "FLOAT16", "", "Scene complexity score 0.0-1.0"),
    entry(0x0098, "CLUTTER_DENSITY", "FLOAT16", "", "Object density per cubic meter"),
    entry(0x0099, "TRAVERSABILITY", "FLOAT16", "", "Surface traversability score 0.0-1.0"),
    entry(0x009A, "DOOR_STATE", "STRUCT{pos,state}", "", "Door: 0=closed, 1=open, 2=ajar, 3=locked"),
    entry(0x009B, "OPENING", "STRUCT{pos,width,height}", "m", "Passable opening (doorway, gap)"),
    entry(0x009C, "STAIRS", "STRUCT{pos,direction,count}", "", "Detected staircase with step count"),
    entry(0x009D, "RAMP", "STRUCT{pos,slope,width}", "", "Detected ramp or incline"),
    entry(0x009E, "SIGN_TEXT", "STRUCT{pos,text,lang}", "", "Detected and OCR'd sign text"),
    entry(0x009F, "QR_CODE", "STRUCT{pos,data}", "", "Detected QR code with decoded data"),
    // Event detection (0x00B0-0x00CF)
    entry(0x00B0, "MOTION_DETECTED", "STRUCT{region,magnitude}", "", "Motion detected in field of view"),
    entry(0x00B1, "OBJECT_APPEARED", "STRUCT{id,class,pos}", "", "New object entered field of view"),
    entry(0x00B2, "OBJECT_DISAPPEARED", "STRUCT{id,last_pos}", "", "Tracked object left field of view"),
    entry(0x00B3, "OBJECT_STOPPED", "STRUCT{id,pos,duration}", "", "Moving object has stopped"),
    entry(0x00B4, "OBJECT_PICKED_UP", "STRUCT{id,agent}", "", "Object was picked up"),
    entry(0x00B5, "OBJECT_PLACED", "STRUCT{id,surface}", "", "Object was placed on surface"),
    entry(0x00B6, "GESTURE_DETECTED", "STRUCT{type,agent,conf}", "", "Human gesture recognized"),
    entry(0x00B7, "GESTURE_TYPE", "UINT8", "", "0=wave, 1=point, 2=stop, 3=come, 4=thumbs_up, 5=thumbs_down, 6=nod, 7=shake_head"),
    entry(0x00B8, "FACE_DETECTED", "STRUCT{bbox,landmarks,id}", "", "Detected human face with optional ID"),
    entry(0x00B9, "FACE_EXPRESSION", "UINT8", "", "0=neutral, 1=happy, 2=sad, 3=angry, 4=surprised, 5=fearful, 6=disgusted"),
    entry(0x00BA, "PERSON_POSE", "LIST<KEYPOINT>", "", "Full body skeleton keypoints"),
    entry(0x00BB, "ACTIVITY_CLASS", "UINT8", "", "0=standing, 1=walking, 2=running, 3=sitting, 4=lying, 5=falling, 6=working, 7=waving"),
    entry(0x00BC, "CROWD_DENSITY", "FLOAT16", "1/m^2", "People per square meter in region"),
    entry(0x00BD, "ANOMALY_DETECTED", "STRUCT{type,pos,conf}", "", "Anomalous event or state detected"),
    entry(0x00BE, "LIGHT_CHANGE", "STRUCT{before,after}", "lux", "Significant illumination change"),
    entry(0x00BF, "OCCLUSION", "STRUCT{obj_id,pct}", "", "Object partially occluded (percent hidden)"),
    // Audio perception (0x00D0-0x00DF)
    entry(0x00D0, "SOUND_EVENT", "STRUCT{class,dir,level}", "", "Detected sound event"),
    entry(0x00D1, "SOUND_CLASS", "UINT8", "", "0=speech, 1=alarm, 2=impact, 3=engine, 4=music, 5=animal, 6=footsteps, 7=glass_break"),
    entry(0x00D2, "SOUND_DIRECTION", "ARRAY<FLOAT32,2>", "rad", "Azimuth and elevation of sound source"),
    entry(0x00D3, "SOUND_LEVEL", "FLOAT16", "dB_SPL", "Sound pressure level"),
    entry(0x00D4, "SPEECH_DETECTED", "STRUCT{dir,lang,dur}", "", "Speech activity detected"),
    entry(0x00D5, "SPEECH_TEXT", "STRUCT{text,lang,conf}", "", "Speech-to-text transcription result"),
    entry(0x00D6, "SPEAKER_ID", "STRUCT{uuid,conf}", "", "Identified speaker (voice print match)"),
    entry(0x00D7, "AMBIENT_NOISE", "FLOAT16", "dB_SPL", "Background noise floor level"),
    entry(0x00D8, "ALARM_ACTIVE", "STRUCT{type,pos,level}", "", "Active alarm detected (fire, security, etc.)"),
    // Tactile and force sensing (0x00E0-0x00EF)
    entry(0x00E0, "CONTACT_DETECTED", "STRUCT{pos,normal,force}", "", "Physical contact detected"),
    entry(0x00E1, "CONTACT_FORCE", "ARRAY<FLOAT32,3>", "N", "Contact force vector"),
    entry(0x00E2, "CONTACT_AREA", "FLOAT32", "m^2", "Estimated contact patch area"),
    entry(0x00E3, "SURFACE_FRICTION", "FLOAT16", "", "Estimated surface friction coefficient"),
    entry(0x00E4, "VIBRATION", "STRUCT{freq,amplitude}", "", "Detected vibration (frequency and amplitude)"),
    entry(0x00E5, "LOAD_CELL", "STRUCT{id,force}", "N", "Load cell reading"),
    entry(0x00E6, "TORQUE_SENSOR", "STRUCT{id,torque}", "Nm", "Torque sensor reading"),
    entry(0x00E7, "SLIP_DETECTED", "STRUCT{gripper,obj}", "", "Object slippage detected at gripper"),
    entry(0x00E8, "PROXIMITY_SENSOR", "STRUCT{id,range}", "m", "Proximity sensor reading"),
    // Environmental sensing (0x00F0-0x00FF)
    entry(0x00F0, "GAS_CONCENTRATION", "STRUCT{gas,ppm}", "ppm", "Gas concentration (CO, CO2, CH4, etc.)"),
    entry(0x00F1, "RADIATION_LEVEL", "FLOAT32", "uSv/h", "Radiation dose rate"),
    entry(0x00F2, "WIND_SPEED", "FLOAT32", "m/s", "Measured wind speed"),
    entry(0x00F3, "WIND_DIRECTION", "FLOAT32", "rad", "Wind direction (from)"),
    entry(0x00F4, "RAIN_RATE", "FLOAT16", "mm/h", "Precipitation rate"),
    entry(0x00F5, "UV_INDEX", "FLOAT16", "", "Ultraviolet radiation index"),
    entry(0x00F6, "AIR_QUALITY_INDEX", "UINT16", "", "Air quality index (0-500)"),
    entry(0x00F7, "DUST_DENSITY", "FLOAT32", "ug/m^3", "Particulate matter concentration"),
    entry(0x00F8, "MAGNETIC_FIELD", "ARRAY<FLOAT32,3>", "uT", "Local magnetic field vector"),
    entry(0x00F9, "LIGHT_SPECTRUM", "STRUCT{wavelengths,intensities}", "", "Spectral light measurement"),
];
