/*!
# Introductory Tutorial for ZUIX-DOS BASIC

Start the `zuix` executable from a terminal. The screen clears and you
are greeted with the banner and the `READY.` prompt.
<pre><code>&nbsp;  ZUIX-DOS Version 1.0 - BASIC Mode
&nbsp;  Memory Size: 64K
&nbsp;  Enter HELP for commands
&nbsp;
&nbsp;  READY.
&nbsp;  A> █
</code></pre>

Stop a running program with CTRL-C. Leave with `EXIT` or CTRL-D.

Everything you type is converted to upper case before it is looked at,
so `print "hi"` prints `HI`. The only exception is the answer you give
to `INPUT`, which is stored exactly as typed.

## Direct mode

A statement without a line number runs immediately.

<pre><code>&nbsp;A> PRINT "HELLO WORLD"
&nbsp;  HELLO WORLD
&nbsp;A> LET A=5
&nbsp;  OK
&nbsp;A> PRINT A
&nbsp;  5
</code></pre>

`PRINT` shows a quoted string, a variable or an array element. Anything
else after `PRINT` is echoed back as written. There are no expressions,
so `PRINT 2+2` prints `2+2`.

The statements that move around a program, `GOTO`, `GOSUB`, `RETURN`,
`FOR` and `NEXT`, report `?ILLEGAL DIRECT` in direct mode.

## Programs

Put a line number from 1 to 4294967295 in front of a statement to store
it instead. Entering a number that already exists replaces that line.

<pre><code>&nbsp;A> 10 INPUT N
&nbsp;A> 20 FOR I=1 TO 3
&nbsp;A> 30 PRINT N
&nbsp;A> 40 NEXT I
&nbsp;A> RUN
&nbsp;  ? 7
&nbsp;  7
&nbsp;  7
&nbsp;  7
</code></pre>

`LIST` shows the program, `NEW` erases it with all variables, and
`SAVE FILE` and `LOAD FILE` keep it on disk one line per statement.
`zuix FILE` on the command line loads a program and runs it.

## Variables

Numeric names are letters and digits starting with a letter, such as
`X` or `TOTAL2`. String names end in `$`. Arrays are dimensioned with
`DIM A(10)` and may have up to three dimensions. An array used without
`DIM` holds eleven elements, `A(0)` through `A(10)`. Unset variables
read as zero or the empty string.

## Conditions

`IF` compares one variable with one number.

<pre><code>&nbsp;A> 10 IF X=0 THEN PRINT "ZERO"
&nbsp;A> 20 IF X=0 THEN 50
</code></pre>

A bare line number after `THEN` is a `GOTO`.

## Stopping and continuing

`STOP` or CTRL-C breaks the program with `?BREAK`. `CONT` picks up at
the next statement as long as the program has not been edited. `TRON`
prints each line number as it runs and `TROFF` turns that off.

## Errors

<pre><code>&nbsp;  ?SYNTAX ERROR            ?UNDEFINED LINE NUMBER
&nbsp;  ?RETURN WITHOUT GOSUB    ?NEXT WITHOUT FOR
&nbsp;  ?OUT OF DATA             ?TYPE MISMATCH
&nbsp;  ?SUBSCRIPT OUT OF RANGE  ?OUT OF MEMORY
&nbsp;  ?ILLEGAL DIRECT          ?CAN'T CONTINUE
&nbsp;  ?FILE NOT FOUND          ?CANNOT OPEN FILE
&nbsp;  ?BREAK
</code></pre>

*/
