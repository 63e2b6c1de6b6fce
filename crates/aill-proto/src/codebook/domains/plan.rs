//! PLAN-1: task planning and goal management (registry id 0x06).

use super::entry;
use crate::codebook::domain::{DomainCodebook, DomainEntry};

/// The PLAN-1 codebook.
pub static PLAN1: DomainCodebook =
    DomainCodebook::new(0x06, "PLAN-1", "Task planning and goal management", ENTRIES);

static ENTRIES: &[DomainEntry] = &[
    // Tasks and goals (0x0000-0x001F)
    entry(0x0000, "TASK", "STRUCT{id,type,params}", "", "Task definition"),
    entry(0x0001, "TASK_ID", "UINT32", "", "Unique task identifier"),
    entry(0x0002, "TASK_STATUS", "UINT8", "", "0=pending, 1=active, 2=complete, 3=failed, 4=cancelled"),
    entry(0x0003, "TASK_PRIORITY", "UINT8", "", "Task priority 0-7"),
    entry(0x0004, "TASK_DEADLINE", "TIMESTAMP", "", "Task completion deadline"),
    entry(0x0005, "TASK_PROGRESS", "FLOAT16", "%", "Completion percentage 0-100%"),
    entry(0x0006, "SUBTASK", "STRUCT{id,parent_id}", "", "Subtask with parent reference"),
    entry(0x0007, "TASK_DEPENDENCY", "STRUCT{task_id,dep_id}", "", "Task A depends on task B"),
    entry(0x0008, "GOAL", "STRUCT{id,condition}", "", "Goal as a boolean condition"),
    entry(0x0009, "GOAL_STATUS", "UINT8", "", "0=unachieved, 1=achieved, 2=impossible"),
    entry(0x000A, "PLAN", "LIST<TASK>", "", "Ordered plan (sequence of tasks)"),
    entry(0x000B, "PLAN_COST", "FLOAT32", "", "Estimated total plan cost"),
    entry(0x000C, "PLAN_DURATION", "FLOAT32", "s", "Estimated total plan duration"),
    entry(0x000D, "ALLOCATE_TASK", "STRUCT{task_id,agent_id}", "", "Assign task to agent"),
    entry(0x000E, "RELEASE_TASK", "UINT32", "", "Unassign/release a task"),
    entry(0x000F, "REPLAN_REQUEST", "STRUCT{reason}", "", "Request plan regeneration"),
    entry(0x0010, "RESOURCE", "STRUCT{type,amount}", "", "Resource requirement or availability"),
    entry(0x0011, "RESOURCE_CONFLICT", "STRUCT{res,agents}", "", "Resource contention report"),
    entry(0x0012, "AUCTION_BID", "STRUCT{task_id,cost}", "", "Bid on a task in task auction"),
    entry(0x0013, "AUCTION_AWARD", "STRUCT{task_id,agent_id}", "", "Award task to winning bidder"),
    // Negotiation and commitment (0x0020-0x003F)
    entry(0x0020, "OFFER", "STRUCT{id,terms}", "", "Offer terms for negotiation"),
    entry(0x0021, "COUNTER_OFFER", "STRUCT{orig_id,new_terms}", "", "Counter-proposal to an offer"),
    entry(0x0022, "ACCEPT_OFFER", "STRUCT{offer_id}", "", "Accept a specific offer"),
    entry(0x0023, "REJECT_OFFER", "STRUCT{offer_id,reason}", "", "Reject an offer with reason"),
    entry(0x0024, "COMMITMENT", "STRUCT{task_id,agent,deadline}", "", "Binding commitment to complete task"),
    entry(0x0025, "COMMITMENT_CANCEL", "STRUCT{commit_id,reason}", "", "Cancel a commitment (with penalty if applicable)"),
    entry(0x0026, "PROMISE_DELIVERY", "STRUCT{what,when,where}", "", "Promise to deliver result at time and place"),
    entry(0x0027, "CAPABILITY_QUERY", "STRUCT{task_type}", "", "Ask what agents can perform task type"),
    entry(0x0028, "CAPABILITY_RESPONSE", "STRUCT{agent,can,cost}", "", "Response: can perform, estimated cost"),
    entry(0x0029, "VOTE_REQUEST", "STRUCT{proposal_id,options}", "", "Request vote on proposal"),
    entry(0x002A, "VOTE_CAST", "STRUCT{proposal_id,choice}", "", "Cast vote on proposal"),
    entry(0x002B, "VOTE_RESULT", "STRUCT{proposal_id,outcome}", "", "Announce voting result"),
    entry(0x002C, "CONSENSUS_REACHED", "STRUCT{topic,value}", "", "Group consensus reached on topic"),
    entry(0x002D, "ARBITRATION_REQ", "STRUCT{dispute,parties}", "", "Request third-party arbitration"),
    // Temporal planning (0x0040-0x005F)
    entry(0x0040, "TIME_WINDOW", "STRUCT{earliest,latest}", "", "Acceptable time window for action"),
    entry(0x0041, "SCHEDULE", "LIST<STRUCT{task,start,end}>", "", "Scheduled sequence of tasks with times"),
    entry(0x0042, "SCHEDULE_CONFLICT", "STRUCT{task_a,task_b,overlap}", "", "Two tasks conflict in time"),
    entry(0x0043, "MILESTONE", "STRUCT{id,condition,deadline}", "", "Named checkpoint in plan"),
    entry(0x0044, "MILESTONE_REACHED", "STRUCT{id,actual_time}", "", "Report milestone completion"),
    entry(0x0045, "CRITICAL_PATH", "LIST<TASK_ID>", "", "Tasks on the critical path (zero slack)"),
    entry(0x0046, "SLACK_TIME", "STRUCT{task_id,slack}", "s", "Available slack time for task"),
    entry(0x0047, "TEMPORAL_CONSTRAINT", "STRUCT{before,after,gap}", "", "Task A must complete >= gap before task B"),
    entry(0x0048, "RECURRING_TASK", "STRUCT{task,interval,count}", "", "Repeating task definition"),
    entry(0x0049, "PREEMPT_TASK", "STRUCT{running_id,new_id}", "", "Interrupt current task for higher priority"),
    entry(0x004A, "RESUME_TASK", "STRUCT{task_id}", "", "Resume a previously preempted task"),
    // Behavior and intent (0x0060-0x007F)
    entry(0x0060, "INTENT", "STRUCT{action,target,purpose}", "", "Declared intent (transparent planning)"),
    entry(0x0061, "INTENT_CONFLICT", "STRUCT{agent_a,agent_b,type}", "", "Detected intent conflict between agents"),
    entry(0x0062, "YIELD", "STRUCT{to_agent,context}", "", "Yield priority to another agent"),
    entry(0x0063, "REQUEST_YIELD", "STRUCT{from_agent,reason}", "", "Ask another agent to yield"),
    entry(0x0064, "BEHAVIOR_MODE", "UINT8", "", "0=normal, 1=cautious, 2=aggressive, 3=energy_saving, 4=exploration, 5=return_to_base"),
    entry(0x0065, "RISK_TOLERANCE", "FLOAT16", "", "Risk acceptance level 0.0 (risk-averse) to 1.0 (risk-seeking)"),
    entry(0x0066, "EXPLANATION", "STRUCT{decision,factors}", "", "Explain reasoning behind a decision"),
    entry(0x0067, "UNCERTAINTY_MAP", "STRUCT{region,entropy}", "", "Spatial uncertainty for exploration planning"),
    entry(0x0068, "INFORMATION_GAIN", "STRUCT{action,expected_bits}", "", "Expected information gain from action"),
    entry(0x0069, "UTILITY", "STRUCT{outcome,value}", "", "Utility value for an outcome"),
    entry(0x006A, "CONSTRAINT", "STRUCT{type,params}", "", "Planning constraint (spatial, temporal, resource)"),
    entry(0x006B, "CONSTRAINT_VIOLATED", "STRUCT{constraint_id,severity}", "", "Report constraint violation"),
    // Workflow and state machine (0x0080-0x0097)
    entry(0x0080, "STATE_MACHINE", "STRUCT{id,states,transitions}", "", "State machine definition"),
    entry(0x0081, "CURRENT_STATE", "STRUCT{machine_id,state}", "", "Current state in a state machine"),
    entry(0x0082, "STATE_TRANSITION", "STRUCT{from,to,trigger}", "", "State transition event"),
    entry(0x0083, "WORKFLOW", "STRUCT{id,steps}", "", "Multi-step workflow definition"),
    entry(0x0084, "WORKFLOW_STEP", "STRUCT{id,action,next}", "", "Single step in a workflow"),
    entry(0x0085, "WORKFLOW_STATUS", "STRUCT{wf_id,step_id,pct}", "", "Current workflow progress"),
    entry(0x0086, "CONDITIONAL_STEP", "STRUCT{condition,if_true,if_false}", "", "Branching step in workflow"),
    entry(0x0087, "PARALLEL_STEPS", "LIST<STRUCT{step_id,agent}>", "", "Steps to execute in parallel"),
    entry(0x0088, "SYNC_BARRIER", "STRUCT{barrier_id,agents}", "", "All agents must reach barrier before proceeding"),
    entry(0x0089, "BARRIER_REACHED", "STRUCT{barrier_id,agent}", "", "Agent arrived at sync barrier"),
];
