//! MANIP-1: robotic manipulation and grasping (registry id 0x03).

use super::entry;
use crate::codebook::domain::{DomainCodebook, DomainEntry};

/// The MANIP-1 codebook.
pub static MANIP1: DomainCodebook =
    DomainCodebook::new(0x03, "MANIP-1", "Robotic manipulation and grasping", ENTRIES);

static ENTRIES: &[DomainEntry] = &[
    // Gripper and end effector (0x0000-0x001F)
    entry(0x0000, "GRIPPER_STATE", "UINT8", "", "0=open, 1=closing, 2=closed, 3=opening, 4=holding, 5=error"),
    entry(0x0001, "GRIPPER_WIDTH", "FLOAT32", "m", "Current gripper aperture width"),
    entry(0x0002, "GRIPPER_FORCE", "FLOAT32", "N", "Current gripper force"),
    entry(0x0003, "GRIPPER_SET_WIDTH", "FLOAT32", "m", "Commanded gripper width"),
    entry(0x0004, "GRIPPER_SET_FORCE", "FLOAT32", "N", "Commanded gripper force limit"),
    entry(0x0005, "TOOL_TYPE", "UINT8", "", "0=parallel_jaw, 1=vacuum, 2=magnetic, 3=soft, 4=finger_3, 5=hook, 6=scoop, 7=custom"),
    entry(0x0006, "TOOL_CENTER_POINT", "ARRAY<FLOAT32,3>", "m", "Tool center point (TCP) in end-effector frame"),
    entry(0x0007, "TOOL_CHANGE_REQ", "UINT8", "", "Request tool change to specified tool type"),
    entry(0x0008, "TOOL_CHANGE_ACK", "UINT8", "", "Tool change completed"),
    entry(0x0009, "SUCTION_PRESSURE", "FLOAT32", "Pa", "Vacuum gripper suction pressure"),
    entry(0x000A, "SUCTION_STATUS", "UINT8", "", "0=off, 1=engaged, 2=leak, 3=lost_seal"),
    entry(0x000B, "FINGER_POSITIONS", "LIST<FLOAT32>", "rad", "Per-finger joint positions"),
    entry(0x000C, "FINGER_FORCES", "LIST<FLOAT32>", "N", "Per-finger contact forces"),
    entry(0x000D, "TACTILE_ARRAY", "STRUCT{rows,cols,data}", "Pa", "Tactile sensor pad readings"),
    // Joint space (0x0020-0x003F)
    entry(0x0020, "JOINT_POSITIONS", "LIST<FLOAT32>", "rad", "All joint angles"),
    entry(0x0021, "JOINT_VELOCITIES", "LIST<FLOAT32>", "rad/s", "All joint angular velocities"),
    entry(0x0022, "JOINT_TORQUES", "LIST<FLOAT32>", "Nm", "All joint torques"),
    entry(0x0023, "JOINT_LIMITS", "LIST<STRUCT{min,max}>", "rad", "Joint angle limits"),
    entry(0x0024, "JOINT_TARGET", "LIST<FLOAT32>", "rad", "Commanded joint positions"),
    entry(0x0025, "JOINT_TRAJECTORY", "LIST<STRUCT{time,positions}>", "", "Time-parameterized joint trajectory"),
    entry(0x0026, "JOINT_IMPEDANCE", "STRUCT{stiffness,damping}", "", "Joint impedance parameters"),
    entry(0x0027, "DOF_COUNT", "UINT8", "", "Number of degrees of freedom"),
    entry(0x0028, "DH_PARAMETERS", "LIST<STRUCT{a,alpha,d,theta}>", "", "Denavit-Hartenberg kinematic parameters"),
    entry(0x0029, "SINGULARITY_PROXIMITY", "FLOAT16", "", "Distance to kinematic singularity 0.0-1.0"),
    // Cartesian space (0x0040-0x005F)
    entry(0x0040, "EE_POSE", "STRUCT{pos,orient}", "", "End-effector pose in base frame"),
    entry(0x0041, "EE_VELOCITY", "STRUCT{linear,angular}", "", "End-effector twist (linear + angular velocity)"),
    entry(0x0042, "EE_WRENCH", "STRUCT{force,torque}", "", "End-effector wrench (force + torque)"),
    entry(0x0043, "CARTESIAN_TARGET", "STRUCT{pos,orient}", "", "Commanded end-effector pose"),
    entry(0x0044, "CARTESIAN_PATH", "LIST<STRUCT{pos,orient,time}>", "", "Cartesian trajectory waypoints"),
    entry(0x0045, "WORKSPACE_LIMIT", "STRUCT{min,max}", "m", "Reachable workspace bounding box"),
    entry(0x0046, "COMPLIANCE_FRAME", "STRUCT{pos,orient}", "", "Reference frame for compliance control"),
    entry(0x0047, "IMPEDANCE_PARAMS", "STRUCT{mass,damping,stiffness}", "", "Cartesian impedance parameters"),
    entry(0x0048, "FORCE_THRESHOLD", "STRUCT{force,torque}", "", "Force/torque thresholds for safety stop"),
    // Grasp planning (0x0060-0x007F)
    entry(0x0060, "GRASP_POSE", "STRUCT{pos,orient,width}", "", "Planned grasp pose"),
    entry(0x0061, "GRASP_QUALITY", "FLOAT16", "", "Grasp quality metric 0.0-1.0"),
    entry(0x0062, "GRASP_TYPE", "UINT8", "", "0=power, 1=precision, 2=pinch, 3=wrap, 4=hook, 5=lateral, 6=spherical"),
    entry(0x0063, "GRASP_LIST", "LIST<STRUCT{pose,quality,type}>", "", "Ranked list of candidate grasps"),
    entry(0x0064, "GRASP_EXECUTE", "STRUCT{grasp_id}", "", "Command: execute specified grasp"),
    entry(0x0065, "GRASP_RESULT", "UINT8", "", "0=success, 1=slip, 2=miss, 3=collision, 4=force_limit"),
    entry(0x0066, "APPROACH_VECTOR", "ARRAY<FLOAT32,3>", "", "Approach direction for grasp"),
    entry(0x0067, "RETREAT_VECTOR", "ARRAY<FLOAT32,3>", "", "Retreat direction after grasp"),
    entry(0x0068, "OBJECT_MASS", "FLOAT32", "kg", "Estimated mass of grasped object"),
    entry(0x0069, "CENTER_OF_MASS", "ARRAY<FLOAT32,3>", "m", "Estimated CoM of grasped object"),
    entry(0x006A, "INERTIA_TENSOR", "ARRAY<FLOAT32,9>", "kg*m^2", "Estimated rotational inertia of object"),
    // Manipulation actions (0x0080-0x009F)
    entry(0x0080, "PICK", "STRUCT{object_id,grasp}", "", "Pick up object with grasp plan"),
    entry(0x0081, "PLACE", "STRUCT{object_id,target_pose}", "", "Place object at target pose"),
    entry(0x0082, "PUSH", "STRUCT{object_id,direction,dist}", "", "Push object in direction"),
    entry(0x0083, "PULL", "STRUCT{object_id,direction,dist}", "", "Pull object in direction"),
    entry(0x0084, "ROTATE_OBJECT", "STRUCT{object_id,axis,angle}", "", "Rotate held object about axis"),
    entry(0x0085, "INSERT", "STRUCT{peg_id,hole_pose,tol}", "", "Peg-in-hole insertion"),
    entry(0x0086, "SCREW", "STRUCT{fastener,direction,torque}", "", "Screw/unscrew operation"),
    entry(0x0087, "POUR", "STRUCT{source,target,amount}", "", "Pour from container to target"),
    entry(0x0088, "WIPE", "STRUCT{surface,pattern,force}", "", "Wiping/cleaning motion"),
    entry(0x0089, "HANDOVER", "STRUCT{object_id,to_agent}", "", "Hand object to another agent"),
    entry(0x008A, "RECEIVE_OBJECT", "STRUCT{from_agent}", "", "Ready to receive object from agent"),
    entry(0x008B, "STACK", "STRUCT{object_id,on_top_of}", "", "Stack object on another"),
    entry(0x008C, "UNSTACK", "STRUCT{object_id}", "", "Remove top object from stack"),
    entry(0x008D, "ALIGN", "STRUCT{object_id,reference}", "", "Align object to reference"),
    entry(0x008E, "FOLD", "STRUCT{object_id,fold_line,angle}", "", "Fold deformable object"),
    entry(0x008F, "CUT", "STRUCT{tool,path,depth}", "", "Cutting operation along path"),
    // Contact and force control (0x00A0-0x00AF)
    entry(0x00A0, "FORCE_MODE", "UINT8", "", "0=position, 1=force, 2=impedance, 3=admittance, 4=hybrid"),
    entry(0x00A1, "TARGET_FORCE", "ARRAY<FLOAT32,3>", "N", "Commanded contact force"),
    entry(0x00A2, "TARGET_TORQUE", "ARRAY<FLOAT32,3>", "Nm", "Commanded contact torque"),
    entry(0x00A3, "CONTACT_STATE", "UINT8", "", "0=free, 1=approaching, 2=contact, 3=stable, 4=sliding, 5=stuck"),
    entry(0x00A4, "FORCE_ERROR", "ARRAY<FLOAT32,6>", "", "Force/torque tracking error"),
    entry(0x00A5, "COMPLIANCE_AXES", "ARRAY<BOOL,6>", "", "Which axes are compliant (force-controlled)"),
    entry(0x00A6, "STIFFNESS_MATRIX", "ARRAY<FLOAT32,36>", "", "6x6 Cartesian stiffness matrix"),
    entry(0x00A7, "DAMPING_MATRIX", "ARRAY<FLOAT32,36>", "", "6x6 Cartesian damping matrix"),
    // Deformable object handling (0x00B0-0x00BF)
    entry(0x00B0, "DEFORM_MODEL", "STRUCT{type,params}", "", "Deformable object model (FEM, mass-spring, etc.)"),
    entry(0x00B1, "DEFORM_STATE", "LIST<ARRAY<FLOAT32,3>>", "m", "Current deformation state (node positions)"),
    entry(0x00B2, "STRETCH_LIMIT", "FLOAT32", "", "Maximum allowable stretch ratio"),
    entry(0x00B3, "STIFFNESS_EST", "FLOAT32", "N/m", "Estimated object stiffness"),
    entry(0x00B4, "ROPE_CONFIG", "LIST<ARRAY<FLOAT32,3>>", "m", "Rope/cable configuration (ordered points)"),
    entry(0x00B5, "CLOTH_CORNERS", "LIST<ARRAY<FLOAT32,3>>", "m", "Cloth corner positions"),
    entry(0x00B6, "KNOT_TYPE", "UINT8", "", "0=none, 1=overhand, 2=bowline, 3=cleat_hitch, 4=unknown"),
];
