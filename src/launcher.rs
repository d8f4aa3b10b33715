//! The `joshua` launcher script written at the root of every bundle.

/// File name of the launcher inside the bundle directory.
pub const LAUNCHER_FILE_NAME: &str = "joshua";

/// Permission bits applied to the launcher (`rwxr-xr-x`).
pub const LAUNCHER_MODE: u32 = 0o755;

const LAUNCHER_HEADER: &str = r#"#!/bin/bash
# Licensed to the Apache Software Foundation (ASF) under one or more
# contributor license agreements.  See the NOTICE file distributed with
# this work for additional information regarding copyright ownership.
# The ASF licenses this file to You under the Apache License, Version 2.0
# (the "License"); you may not use this file except in compliance with
# the License.  You may obtain a copy of the License at
#
#     http://www.apache.org/licenses/LICENSE-2.0
#
# Unless required by applicable law or agreed to in writing, software
# distributed under the License is distributed on an "AS IS" BASIS,
# WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
# See the License for the specific language governing permissions and
# limitations under the License.

# Joshua decoder invocation script.
#
# This script takes care of passing arguments to Java and to the
# Joshua decoder. It changes to the current directory so that paths in
# the config file are relative to the current directory. Usage:
#
# joshua [-m memory] [Joshua arguments]
#
# The default amount of memory is 4gb.

NUM_ARGS=0
E_OPTERROR=1

## memory usage; default is 4 GB
"#;

const LAUNCHER_BODY: &str = r#"
if [[ $1 == "-m" ]]; then
    mem=$2
    shift
    shift
fi

set -u

bundledir=$(dirname $0)
cd $bundledir   # relative paths are now safe....

exec java -mx${mem} \
    -Dfile.encoding=utf8 \
    -Djava.library.path=./lib \
    -cp ./target/joshua-*-jar-with-dependencies.jar \
    org.apache.joshua.decoder.JoshuaDecoder -c joshua.config -v 0 "$@"
"#;

/// Render the launcher script with `mem` as the default JVM heap size.
///
/// The value is inserted verbatim; callers pass whatever the user gave to
/// `--mem` (for example `4g` or `512m`).
///
/// # Examples
///
/// ```
/// use joshua_bundle::launcher::runner_text;
///
/// let script = runner_text("8g");
/// assert!(script.starts_with("#!/bin/bash\n"));
/// assert!(script.contains("\nmem=8g\n"));
/// ```
#[must_use]
pub fn runner_text(mem: &str) -> String {
    format!("{LAUNCHER_HEADER}mem={mem}\n{LAUNCHER_BODY}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_memory_is_baked_in() {
        let text = runner_text("4g");
        assert_eq!(text.lines().filter(|l| *l == "mem=4g").count(), 1);
    }

    #[test]
    fn runs_decoder_against_bundled_config() {
        let text = runner_text("4g");
        assert!(text.contains("exec java -mx${mem} \\\n"));
        assert!(text.contains("-c joshua.config -v 0 \"$@\"\n"));
        assert!(text.contains("cd $bundledir"));
    }

    #[test]
    fn memory_override_precedes_set_u() {
        let text = runner_text("2g");
        let over = text.find("if [[ $1 == \"-m\" ]]").unwrap_or(usize::MAX);
        let strict = text.find("set -u").unwrap_or(0);
        assert!(over < strict);
    }

    #[test]
    fn ends_with_single_newline() {
        let text = runner_text("4g");
        assert!(text.ends_with("\"$@\"\n"));
        assert!(!text.ends_with("\n\n"));
    }
}
